#![allow(dead_code)]

use flyweight_maze::Block;
use std::fs;
use std::path::Path;

pub const FIXTURE_DIR: &str = "./test_data/blocks";

/// Load an expected rendering: one line per block row
pub fn load_expected(name: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let path = Path::new(FIXTURE_DIR).join(name);
    let contents = fs::read_to_string(&path)?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    if lines.len() != 3 {
        return Err(format!("{} has {} lines, expected 3", path.display(), lines.len()).into());
    }
    Ok(lines)
}

/// Compare a block's rendering to a fixture, printing both on mismatch
pub fn assert_renders_as(block: &Block, fixture: &str) {
    let expected = load_expected(fixture)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}': {}", fixture, e));
    let actual = block.render();
    if actual != expected {
        panic!(
            "Block does not match '{}'\nexpected:\n{}\nactual:\n{}",
            fixture,
            expected.join("\n"),
            actual.join("\n")
        );
    }
}

/// Names of the elements in every cell, row-major
pub fn element_names(block: &Block) -> Vec<String> {
    block.iter().map(|c| c.element().name().to_string()).collect()
}
