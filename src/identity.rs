use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const SITE: &str = "https://adventofcode.com";

/// One puzzle instance. Every derived name (folder, notebook, URLs) comes
/// from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleIdentity {
    year: i32,
    day: u32,
}

impl PuzzleIdentity {
    pub fn new(year: i32, day: u32) -> Result<Self> {
        if !(1..=25).contains(&day) {
            bail!("day must be between 1 and 25, got {day}");
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn folder_name(&self) -> String {
        format!("day{:02}", self.day)
    }

    pub fn notebook_name(&self) -> String {
        format!("{}.ipynb", self.folder_name())
    }

    pub fn puzzle_url(&self) -> String {
        format!("{}/{}/day/{}", SITE, self.year, self.day)
    }

    pub fn input_url(&self) -> String {
        format!("{}/input", self.puzzle_url())
    }
}
