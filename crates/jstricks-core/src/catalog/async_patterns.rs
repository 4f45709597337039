//! Async operation tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "async-sleep-function",
        title: "Sleep Function",
        description: "Pause async code for a duration",
        code: r#"const sleep = ms => new Promise(resolve => setTimeout(resolve, ms));
await sleep(1000)"#,
        result: Some("Resolves after 1000ms"),
        explanation: "Wraps setTimeout in a Promise so it can be awaited",
    },
    TrickExample {
        id: "async-parallel-requests",
        title: "Parallel Requests",
        description: "Run independent promises concurrently",
        code: r#"const [users, posts] = await Promise.all([
  fetch('/api/users').then(r => r.json()),
  fetch('/api/posts').then(r => r.json())
])"#,
        result: Some("Both results after the slowest request"),
        explanation: "Promise.all() runs promises concurrently and resolves when all complete",
    },
    TrickExample {
        id: "async-promise-timeout",
        title: "Promise Timeout",
        description: "Reject a promise that takes too long",
        code: r#"const withTimeout = (promise, ms) =>
  Promise.race([
    promise,
    new Promise((_, reject) =>
      setTimeout(() => reject(new Error('Timed out')), ms)
    )
  ]);
const data = await withTimeout(fetch('/api/slow'), 5000)"#,
        result: Some("Result or 'Timed out' rejection"),
        explanation: "Promise.race() settles with whichever promise finishes first",
    },
    TrickExample {
        id: "async-sequential-processing",
        title: "Sequential Processing",
        description: "Process items one at a time with async/await",
        code: r#"const processAll = async (items, fn) => {
  const results = [];
  for (const item of items) {
    results.push(await fn(item));
  }
  return results;
}"#,
        result: Some("Results in input order"),
        explanation: "for...of with await processes each item before starting the next",
    },
];
