// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `seqlib-demo`: a numbered menu that exercises each container.
//!
//! Selections come from the positional arguments when given, otherwise one
//! per line from stdin. The loop ends on `7` or when input runs out.

// Crate imports
use seqlib::{
    algorithm, math, DoublyLinkedList, DynamicArray, Error, FixedArray, FixedVector,
    IntrusiveList, Matrix,
};

// External imports - anyhow
use anyhow::Result;

// External imports - clap
use clap::{Arg, ArgAction, Command};

// External imports - log
use log::LevelFilter;

// Std imports
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Vector,
    Matrix,
    VectorNd,
    List,
    IntrusiveList,
    Array,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Vector),
            2 => Some(Self::Matrix),
            3 => Some(Self::VectorNd),
            4 => Some(Self::List),
            5 => Some(Self::IntrusiveList),
            6 => Some(Self::Array),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("SEQLIB_LOG", "warn,seqlib=info"))
        .init();

    let matches = Command::new("seqlib-demo")
        .version(clap::crate_version!())
        .about("Interactive tour of the seqlib containers")
        .arg(
            Arg::new("selections")
                .help("Menu selections to run in order (1-7); reads stdin when omitted")
                .value_name("CHOICE")
                .action(ArgAction::Append),
        )
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match matches.get_many::<String>("selections") {
        Some(selections) => run(selections.cloned(), &mut out),
        None => {
            let lines = io::stdin().lock().lines().map_while(|line| line.ok());
            run(lines, &mut out)
        }
    }
}

fn run<I, W>(inputs: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut inputs = inputs.into_iter();
    loop {
        display_main_menu(out)?;
        let Some(input) = inputs.next() else {
            log::debug!("input exhausted, leaving the menu");
            return Ok(());
        };
        let Some(choice) = Choice::parse(&input) else {
            writeln!(out, "Invalid choice. Try again.")?;
            continue;
        };
        log::debug!("menu selection: {choice:?}");
        match choice {
            Choice::Vector => vector_operations(out)?,
            Choice::Matrix => matrix_operations(out)?,
            Choice::VectorNd => vector_nd_operations(out)?,
            Choice::List => list_operations(out)?,
            Choice::IntrusiveList => intrusive_list_operations(out)?,
            Choice::Array => array_operations(out)?,
            Choice::Exit => {
                write!(out, "\nExiting...\n")?;
                return Ok(());
            }
        }
    }
}

fn display_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write!(
        out,
        "\n--- Mathematical Library Demo ---\n\
         1. Vector Operations\n\
         2. Matrix Operations\n\
         3. VectorND Operations\n\
         4. List Operations\n\
         5. IntrusiveList Operations\n\
         6. Array Operations\n\
         7. Exit\n\
         \nChoose an option: "
    )?;
    out.flush()
}

fn vector_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Vector Operations ---")?;
    let mut vec: DynamicArray<i32> = DynamicArray::with_capacity(10);
    for i in 1..=5 {
        vec.push_back(i);
    }
    writeln!(out, "Vector: {vec}")?;
    vec.push_back(100);
    writeln!(out, "After push_back(100): {vec} (size {}, capacity {})", vec.len(), vec.capacity())?;
    vec.pop_back()?;
    vec.erase(0)?;
    vec.insert(0, 100)?;
    writeln!(out, "After pop_back, erase(0), insert(0, 100): {vec}")?;
    writeln!(out, "First element: {}", vec.front()?)?;
    writeln!(out, "Last element: {}", vec.back()?)?;
    vec.sort();
    writeln!(out, "Sorted: {vec}")?;
    vec.clear();
    writeln!(out, "Cleared: {vec}")?;
    report(out, "pop_back on empty vector", vec.pop_back())?;
    Ok(())
}

fn matrix_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Matrix Operations ---")?;
    let m: Matrix<i32, 3, 3> = Matrix::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    write!(out, "Matrix:\n{m}")?;
    writeln!(out, "Cell (1, 2): {}", m.cell(1, 2)?)?;
    write!(out, "Matrix + Matrix:\n{}", m + m)?;
    write!(out, "Matrix * 2:\n{}", m * 2)?;
    write!(out, "(Matrix * 2) - Matrix:\n{}", m * 2 - m)?;
    report(out, "Matrix / 0", m / 0)?;
    report(out, "cell (1, 3)", m.cell(1, 3))?;
    Ok(())
}

fn vector_nd_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- VectorND Operations ---")?;
    let a = FixedVector::from([1.0, 2.0, 3.0]);
    let b: FixedVector<f64, 3> = FixedVector::from_slice(&[4.0, 5.0])?;
    writeln!(out, "a = {a}, b = {b}")?;
    writeln!(out, "a + b = {}", a + b)?;
    writeln!(out, "b - a = {}", b - a)?;
    writeln!(out, "a * 2 = {}", a * 2.0)?;
    writeln!(out, "b / 2 = {}", (b / 2.0)?)?;
    writeln!(out, "a . b = {}", math::dot(&a, &b))?;
    writeln!(out, "a x b = {}", math::cross(&a, &b))?;
    writeln!(out, "|a| = {:.4}", math::norm(&a))?;
    writeln!(out, "a / |a| = {}", math::normalize(&a)?)?;
    report(out, "a / 0", a / 0.0)?;
    report(out, "normalize(0)", math::normalize(&FixedVector::<f64, 3>::zeros()))?;
    Ok(())
}

fn list_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- List Operations ---")?;
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    writeln!(out, "New list: {list}")?;
    for i in 1..=3 {
        list.push_back(i * 10);
    }
    list.push_front(0);
    writeln!(out, "List: {list}")?;

    let second = list.next(list.begin())?;
    let inserted = list.insert(second, 5)?;
    writeln!(out, "Inserted {} before the second element: {list}", list.get(inserted)?)?;
    list.erase(inserted)?;
    writeln!(out, "Erased it again: {list}")?;

    let reversed: Vec<String> = list.iter().rev().map(ToString::to_string).collect();
    writeln!(out, "Back to front: {}", reversed.join(" "))?;
    writeln!(out, "Element at 2: {}", list.at(2)?)?;
    report(out, "stale position", list.get(inserted))?;

    let mut other = DoublyLinkedList::from([3, 2, 1]);
    list.swap(&mut other);
    other.sort();
    writeln!(out, "Swapped: {list} / sorted other: {other}")?;
    Ok(())
}

fn intrusive_list_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- IntrusiveList Operations ---")?;
    let mut list: IntrusiveList<i32> = IntrusiveList::new();
    report(out, "begin() on empty list", list.begin())?;
    list.assign_slice(&[4, 8, 15, 16]);
    list.push_back(23);
    list.push_front(42);
    let end = list.end()?;
    report(out, "insert before end()", list.insert(end, 99))?;
    writeln!(out, "List: {list}")?;

    for node in &list {
        let previous = node.previous().map(|n| n.to_string());
        let next = node.next().map(|n| n.to_string());
        writeln!(
            out,
            "  {node}: previous {}, next {}",
            previous.as_deref().unwrap_or("-"),
            next.as_deref().unwrap_or("-")
        )?;
    }

    let front = list.front()?.position();
    writeln!(out, "Erased front node holding {}", list.erase(front)?)?;
    report(out, "erase(stale)", list.erase(front))?;
    list.sort();
    writeln!(out, "Sorted: {list}")?;
    list.clear();
    writeln!(out, "Cleared (prints nothing): [{list}]")?;
    Ok(())
}

fn array_operations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Array Operations ---")?;
    let mut a = FixedArray::from([6, 7, 8, 9, 0]);
    let mut b: FixedArray<i32, 5> = FixedArray::try_from(&[1, 2, 3, 4, 5][..])?;
    writeln!(out, "a = {a}, b = {b}")?;
    report(out, "FixedArray<5> from 3 values", FixedArray::<i32, 5>::try_from(&[1, 2, 3][..]))?;
    report(out, "a.at(5)", a.at(5))?;

    a.swap(&mut b);
    writeln!(out, "After swap: a = {a}, b = {b}")?;
    b.sort();
    writeln!(out, "Sorted b: {b}")?;
    algorithm::fill(a.iter_mut().rev().take(2), &0);
    writeln!(out, "a with its last two elements zeroed: {a}")?;
    writeln!(out, "front {}, back {}, size {}", a.front()?, a.back()?, a.len())?;
    Ok(())
}

/// Prints the outcome of an operation that is expected to fail.
fn report<W: Write, T: std::fmt::Debug>(out: &mut W, what: &str, result: Result<T, Error>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{what}: {value:?}"),
        Err(e) => writeln!(out, "{what}: error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{run, Choice};

    fn transcript(inputs: &[&str]) -> String {
        let mut out = Vec::new();
        run(inputs.iter().map(|s| s.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(Choice::parse("1"), Some(Choice::Vector));
        assert_eq!(Choice::parse(" 7\n"), Some(Choice::Exit));
        assert_eq!(Choice::parse("0"), None);
        assert_eq!(Choice::parse("abc"), None);
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let text = transcript(&["9", "7"]);
        assert!(text.contains("Invalid choice. Try again."));
        assert_eq!(text.matches("Choose an option: ").count(), 2);
        assert!(text.ends_with("\nExiting...\n"));
    }

    #[test]
    fn test_every_routine_runs() {
        let text = transcript(&["1", "2", "3", "4", "5", "6", "7"]);
        assert!(text.contains("After pop_back, erase(0), insert(0, 100): (100, 2, 3, 4, 5)"));
        assert!(text.contains("Cell (1, 2): 6"));
        assert!(text.contains("Matrix / 0: error: cannot divide by 0"));
        assert!(text.contains("New list: Empty list"));
        assert!(text.contains("begin() on empty list: error: container is empty"));
        assert!(text.contains("insert before end(): error: index out of range"));
        assert!(text.contains("List: (42, 4, 8, 15, 16, 23)"));
        assert!(text.contains("FixedArray<5> from 3 values: error: size mismatch"));
        assert!(text.contains("Cleared (prints nothing): []"));
    }

    #[test]
    fn test_input_exhaustion_ends_quietly() {
        let text = transcript(&["4"]);
        assert!(text.contains("--- List Operations ---"));
        assert!(!text.contains("Exiting"));
    }
}
