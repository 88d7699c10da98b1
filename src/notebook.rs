use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identity::PuzzleIdentity;

/// A single nbformat-4 cell. Only the two cell kinds the worksheet uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: Map<String, Value>,
        source: String,
    },
    Code {
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: String,
    },
}

impl Cell {
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::Markdown {
            metadata: Map::new(),
            source: source.into(),
        }
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self::Code {
            execution_count: None,
            metadata: Map::new(),
            outputs: vec![],
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Worksheet boilerplate for one day: title, a setup cell that reads
/// `sample.txt` (the default working dataset during development), and a
/// heading plus stub for each of the two parts. Pure templating.
pub fn generate(identity: &PuzzleIdentity) -> Notebook {
    let title = format!(
        "# 🎄 Advent of Code {} - Day {:02}\n{}",
        identity.year(),
        identity.day(),
        identity.puzzle_url()
    );

    let setup = concat!(
        "import numpy as np\n",
        "import re\n",
        "import json\n",
        "import math\n",
        "\n",
        "# Load input\n",
        "with open('sample.txt') as f:\n",
        "    data = f.read().strip()\n",
        "    print(data)\n",
    );

    Notebook {
        cells: vec![
            Cell::markdown(title),
            Cell::code(setup),
            Cell::markdown("## ⭐ Part 1"),
            Cell::code(part_stub(1)),
            Cell::markdown("## ⭐ Part 2"),
            Cell::code(part_stub(2)),
        ],
        metadata: Map::new(),
        nbformat: 4,
        nbformat_minor: 4,
    }
}

fn part_stub(part: u32) -> String {
    format!(
        "# Part {part} solution\ndef part{part}(data):\n    pass  # TODO: implement\n\n# print(part{part}(data))"
    )
}
