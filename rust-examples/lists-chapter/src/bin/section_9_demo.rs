//! Chapter 9: Lists and Hierarchical Data, as a walkthrough
//!
//! Run with: cargo run --bin section_9_demo
//! Set RUST_LOG=debug to see why a typed operation rejected its input.

use lists_chapter::section_9_1::{chapter_list, chained, describe, double_bracket, single_bracket};
use lists_chapter::section_9_2::{
    assignee_logins, comment_counts, first_labels, issue_ids, user_logins,
};
use lists_chapter::section_9_3::{
    any_discussed, first_busy, first_closed, leading_positives, open_issues, trailing_positives,
};
use lists_chapter::section_9_4::{dotted_leaves, label_names, sum_nested};
use lists_chapter::section_9_5::{issue_columns, unzip};
use lists_chapter::section_9_6::{load_issues, records_to_json};
use lists_common::flatten::flatten;
use lists_common::map::map_int;
use lists_common::testing::init_logging;
use lists_common::{ListError, PathSegment, list, path};

fn banner(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

fn main() -> Result<(), ListError> {
    init_logging("info");
    println!("=== Chapter 9: Lists and Hierarchical Data ===");

    // =========================================================================
    // Section 9.1: Creating and Subsetting
    // =========================================================================
    banner("Section 9.1: Creating and Subsetting Lists");
    let a = chapter_list();
    println!("a = {a}");
    print!("{}", describe(&a));
    println!("a[c(\"a\", \"b\")] = {}", single_bracket(&a, &["a", "b"])?);
    if let Some(b) = double_bracket(&a, "b") {
        println!("a[[\"b\"]]        = {b}");
    }
    println!("a[[\"d\"]][[1]]   = {}", chained(&a)?);

    // =========================================================================
    // Section 9.2: Extracting Deeply Nested Elements
    // =========================================================================
    banner("Section 9.2: Extracting Deeply Nested Elements");
    let issues = load_issues()?;
    println!("ids:       {:?}", issue_ids(&issues)?);
    println!("authors:   {:?}", user_logins(&issues)?);
    println!("assignees: {:?}", assignee_logins(&issues)?);
    println!("labels[0]: {:?}", first_labels(&issues)?);
    println!("comments:  {:?}", comment_counts(&issues)?);

    // =========================================================================
    // Section 9.3: Predicate Functions
    // =========================================================================
    banner("Section 9.3: Predicate Functions");
    let open = open_issues(&issues);
    println!("open issues: {:?}", map_int(&open, &path!["number"])?);
    println!("any discussed: {}", any_discussed(&issues));
    println!("first closed at: {:?}", first_closed(&issues));
    if let Some(busy) = first_busy(&issues, 5) {
        println!("first busy issue: {}", busy.pluck(&path!["title"])?);
    }
    let x = list![3, 1, -2, 5, 8];
    println!("head_while(> 0) of {x}: {}", leading_positives(&x));
    println!("tail_while(> 0) of {x}: {}", trailing_positives(&x));

    // =========================================================================
    // Section 9.4: Flattening
    // =========================================================================
    banner("Section 9.4: Flattening");
    println!("label names: {:?}", label_names(&issues)?);
    let drifted = list![list![1, 2], list![3, list![4]]];
    println!("flatten({drifted}) = {}", flatten(&drifted));
    match sum_nested(&drifted) {
        Ok(total) => println!("sum: {total}"),
        Err(err) => println!("typed flatten refused: {err}"),
    }
    let nested = list!["user" => list!["login" => "ada-l", "id" => 310001]];
    println!("flatten_all with dotted names: {}", dotted_leaves(&nested)?);

    // =========================================================================
    // Section 9.5: Transposing
    // =========================================================================
    banner("Section 9.5: Transposing");
    println!("columns: {}", issue_columns(&issues)?);
    let (left, right) = unzip(&list![list![1, "a"], list![2, "b"]])?;
    println!("unzip: {left} / {right}");

    // =========================================================================
    // Section 9.6: Back to JSON
    // =========================================================================
    banner("Section 9.6: Back to JSON");
    let first = issues.subset(&[PathSegment::Index(0)])?;
    println!("{}", records_to_json(&first)?);

    Ok(())
}
