//! Plain-text bar renderer
//!
//! Draws one horizontal bar per element of a step's snapshot. The bars
//! inside the highlight are split around its midpoint so the two halves
//! being worked on are visually distinct, mirroring the color classes of
//! a graphical renderer: single, left, right, idle, and (when the run
//! finishes) sorted.

use crate::types::{Range, Step};

/// How a bar relates to the current highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarClass {
    /// The one element of a single-element highlight
    Single,
    /// Left half of the highlighted region
    Left,
    /// Right half of the highlighted region
    Right,
    /// Not involved in the current checkpoint
    Idle,
}

impl BarClass {
    fn of(index: usize, highlight: Range) -> Self {
        let Range { start, end } = highlight;
        let mid = highlight.midpoint();
        if start == mid && mid == end && index == start {
            BarClass::Single
        } else if start <= index && index < mid {
            BarClass::Left
        } else if mid <= index && index <= end {
            BarClass::Right
        } else {
            BarClass::Idle
        }
    }

    fn glyph(self) -> char {
        match self {
            BarClass::Single => '*',
            BarClass::Left => '<',
            BarClass::Right => '>',
            BarClass::Idle => '.',
        }
    }

    fn label(self) -> &'static str {
        match self {
            BarClass::Single => "single",
            BarClass::Left => "left",
            BarClass::Right => "right",
            BarClass::Idle => "",
        }
    }
}

/// Render one checkpoint as labeled horizontal bars.
pub fn render_step(step: &Step<u32>) -> String {
    let mut out = String::new();
    for (i, &value) in step.snapshot.iter().enumerate() {
        let class = BarClass::of(i, step.highlight);
        bar_line(&mut out, i, value, class.glyph(), class.label());
    }
    out
}

/// Render the terminal sorted sequence.
pub fn render_final(sorted: &[u32]) -> String {
    let mut out = String::new();
    for (i, &value) in sorted.iter().enumerate() {
        bar_line(&mut out, i, value, '=', "sorted");
    }
    out.push_str(&format!("Final result: {sorted:?}\n"));
    out
}

fn bar_line(out: &mut String, index: usize, value: u32, glyph: char, label: &str) {
    let bar: String = std::iter::repeat(glyph).take(value as usize).collect();
    out.push_str(&format!("{index:>3} | {bar} {value} {label}\n"));
}
