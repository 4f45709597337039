//! Advanced JavaScript patterns

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "advanced-infinite-fibonacci-generator",
        title: "Infinite Fibonacci Generator",
        description: "Generate infinite Fibonacci sequence",
        code: r#"const fibonacci = function*() {
  let [a, b] = [0, 1];
  while (true) {
    yield a;
    [a, b] = [b, a + b];
  }
};

// Usage
const fib = fibonacci();
fib.next().value; // 0
fib.next().value; // 1
fib.next().value; // 1"#,
        result: Some("0, 1, 1, 2, 3, 5..."),
        explanation: "Generator function yields values indefinitely, maintaining state between calls",
    },
    TrickExample {
        id: "advanced-range-generator-with-step",
        title: "Range Generator with Step",
        description: "Generate range of numbers with custom step",
        code: r#"const range = function*(start, end, step = 1) {
  for (let i = start; step > 0 ? i <= end : i >= end; i += step) {
    yield i;
  }
};

// Usage
[...range(0, 10, 2)]; // [0, 2, 4, 6, 8, 10]"#,
        result: Some("[0, 2, 4, 6, 8, 10]"),
        explanation: "Generator yields values in range with specified step, handles both positive and negative steps",
    },
    TrickExample {
        id: "advanced-cycle-through-values",
        title: "Cycle Through Values",
        description: "Infinite cycle through array values",
        code: r#"const cycle = function*(arr) {
  while (true) yield* arr;
};

const colors = cycle(['red', 'green', 'blue']);
colors.next().value; // 'red'
colors.next().value; // 'green'"#,
        result: Some("'red', 'green', 'blue', 'red'..."),
        explanation: "yield* delegates to the array, the outer loop restarts it forever",
    },
    TrickExample {
        id: "advanced-negative-array-indices",
        title: "Negative Array Indices",
        description: "Python-style arr[-1] with Proxy",
        code: r#"const negativeIndex = arr => new Proxy(arr, {
  get: (target, prop) => {
    const i = Number(prop);
    return i < 0 ? target[target.length + i] : target[prop];
  }
});
const arr = negativeIndex([1, 2, 3, 4, 5]);
arr[-1]"#,
        result: Some("5"),
        explanation: "Proxy intercepts property access, negative indices count from the end",
    },
    TrickExample {
        id: "advanced-retry-with-exponential-backoff",
        title: "Retry with Exponential Backoff",
        description: "Retry failed async operations with growing delays",
        code: r#"const retry = async (fn, attempts = 3, delay = 100) => {
  for (let i = 0; i < attempts; i++) {
    try {
      return await fn();
    } catch (err) {
      if (i === attempts - 1) throw err;
      await new Promise(r => setTimeout(r, delay * 2 ** i));
    }
  }
};
const data = await retry(() => fetch('/api/flaky'))"#,
        result: Some("Result, or the last error after 3 attempts"),
        explanation: "Each failure doubles the wait before the next attempt, the final failure propagates",
    },
    TrickExample {
        id: "advanced-function-composition",
        title: "Function Composition",
        description: "Build pipelines from small functions",
        code: r#"const compose = (...fns) => x => fns.reduceRight((v, f) => f(v), x);
const slugify = compose(
  s => s.replace(/\s+/g, '-'),
  s => s.trim(),
  s => s.toLowerCase()
);
slugify('  Hello World  ')"#,
        result: Some("'hello-world'"),
        explanation: "reduceRight() threads the value through each function from right to left",
    },
];
