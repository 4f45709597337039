//! Number operation tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "numbers-round-to-decimal-places",
        title: "Round to Decimal Places",
        description: "Round number to specific decimal places",
        code: "const rounded = Math.round(num * 100) / 100",
        result: Some("3.14"),
        explanation: "Multiply by 10^n, round, then divide by 10^n",
    },
    TrickExample {
        id: "numbers-random-number-in-range",
        title: "Random Number in Range",
        description: "Generate random number between min and max",
        code: "const random = (min, max) => Math.random() * (max - min) + min",
        result: None,
        explanation: "Math.random() gives 0-1, scale to desired range",
    },
    TrickExample {
        id: "numbers-fast-floor-with-double-not",
        title: "Fast Floor with Double NOT",
        description: "Truncate a positive number to an integer",
        code: "const floored = ~~4.9",
        result: Some("4"),
        explanation: "~~ is double bitwise NOT, a fast Math.floor for positive numbers",
    },
    TrickExample {
        id: "numbers-check-even-or-odd",
        title: "Check Even or Odd",
        description: "Test parity with bitwise AND",
        code: "const isEven = n => (n & 1) === 0",
        result: Some("true"),
        explanation: "The lowest bit is 0 for even numbers, 1 for odd numbers",
    },
];
