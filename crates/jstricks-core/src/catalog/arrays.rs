//! Array manipulation tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "arrays-remove-duplicates",
        title: "Remove Duplicates",
        description: "Create unique array using Set",
        code: "const unique = [...new Set([1, 2, 2, 3, 4, 4])]",
        result: Some("[1, 2, 3, 4]"),
        explanation: "Set automatically removes duplicates, spread operator converts back to array",
    },
    TrickExample {
        id: "arrays-flatten-nested-arrays",
        title: "Flatten Nested Arrays",
        description: "Flatten arrays of any depth",
        code: "const flat = [1, [2, 3, [4, 5]]].flat(Infinity)",
        result: Some("[1, 2, 3, 4, 5]"),
        explanation: "flat(Infinity) recursively flattens all nested levels",
    },
    TrickExample {
        id: "arrays-sum-array",
        title: "Sum Array",
        description: "Calculate sum of numbers",
        code: "const sum = [1, 2, 3, 4, 5].reduce((a, b) => a + b, 0)",
        result: Some("15"),
        explanation: "reduce() accumulates values, starting with initial value 0",
    },
    TrickExample {
        id: "arrays-create-range-array",
        title: "Create Range Array",
        description: "Generate array of numbers from 0 to n-1",
        code: "const range = [...Array(10).keys()]",
        result: Some("[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]"),
        explanation: "Array(10) creates array with 10 empty slots, keys() gives indices 0-9",
    },
    TrickExample {
        id: "arrays-create-range-1-to-n",
        title: "Create Range 1 to N",
        description: "Generate array from 1 to n",
        code: "const range1toN = Array.from({length: 10}, (_, i) => i + 1)",
        result: Some("[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]"),
        explanation: "Array.from() with mapping function creates array with custom values",
    },
    TrickExample {
        id: "arrays-find-max-min",
        title: "Find Max/Min",
        description: "Find maximum and minimum values",
        code: "const arr = [3, 1, 4, 1, 5, 9];\nconst max = Math.max(...arr);\nconst min = Math.min(...arr)",
        result: Some("{ max: 9, min: 1 }"),
        explanation: "Spread operator (...) expands array into individual arguments for Math.max/min",
    },
    TrickExample {
        id: "arrays-group-by-property",
        title: "Group by Property",
        description: "Group objects by a specific property",
        code: r#"const users = [
  {name: 'Alice', age: 25, city: 'NYC'},
  {name: 'Bob', age: 30, city: 'LA'},
  {name: 'Charlie', age: 25, city: 'NYC'}
];
const groupBy = (arr, key) => arr.reduce((acc, obj) => {
  const group = obj[key];
  acc[group] = acc[group] || [];
  acc[group].push(obj);
  return acc;
}, {});
const grouped = groupBy(users, 'city')"#,
        result: Some("{ NYC: [Alice, Charlie], LA: [Bob] }"),
        explanation: "reduce() builds an object where keys are property values and values are arrays of matching objects",
    },
    TrickExample {
        id: "arrays-chunk-array",
        title: "Chunk Array",
        description: "Split array into smaller chunks",
        code: r#"const chunk = (arr, size) =>
  Array.from({length: Math.ceil(arr.length / size)}, (_, i) =>
    arr.slice(i * size, i * size + size)
  );
const chunks = chunk([1, 2, 3, 4, 5, 6], 2)"#,
        result: Some("[[1, 2], [3, 4], [5, 6]]"),
        explanation: "Array.from() creates new array with calculated length, slice() extracts chunks",
    },
    TrickExample {
        id: "arrays-array-intersection",
        title: "Array Intersection",
        description: "Find common elements between arrays",
        code: r#"const intersection = (a, b) =>
  a.filter(x => b.includes(x));
const common = intersection([1, 2, 3], [2, 3, 4])"#,
        result: Some("[2, 3]"),
        explanation: "filter() keeps elements that exist in both arrays using includes()",
    },
    TrickExample {
        id: "arrays-array-union",
        title: "Array Union",
        description: "Combine arrays and remove duplicates",
        code: r#"const union = (a, b) => [...new Set([...a, ...b])];
const combined = union([1, 2, 3], [2, 3, 4])"#,
        result: Some("[1, 2, 3, 4]"),
        explanation: "Spread operator combines arrays, Set removes duplicates",
    },
    TrickExample {
        id: "arrays-array-difference",
        title: "Array Difference",
        description: "Find elements in first array not in second",
        code: r#"const difference = (a, b) =>
  a.filter(x => !b.includes(x));
const diff = difference([1, 2, 3], [2, 3, 4])"#,
        result: Some("[1]"),
        explanation: "filter() keeps elements that don't exist in second array",
    },
    TrickExample {
        id: "arrays-count-occurrences",
        title: "Count Occurrences",
        description: "Count frequency of each element",
        code: r#"const countOccurrences = (arr) =>
  arr.reduce((acc, val) => {
    acc[val] = (acc[val] || 0) + 1;
    return acc;
  }, {});
const counts = countOccurrences(['a', 'b', 'a', 'c', 'b'])"#,
        result: Some("{ a: 2, b: 2, c: 1 }"),
        explanation: "reduce() builds object with element counts, || 0 provides default value",
    },
    TrickExample {
        id: "arrays-array-partition",
        title: "Array Partition",
        description: "Split array based on condition",
        code: r#"const partition = (arr, fn) =>
  arr.reduce((acc, val) => {
    acc[fn(val) ? 0 : 1].push(val);
    return acc;
  }, [[], []]);
const [evens, odds] = partition([1, 2, 3, 4, 5], x => x % 2 === 0)"#,
        result: Some("[[2, 4], [1, 3, 5]]"),
        explanation: "reduce() creates two arrays: one for true conditions, one for false",
    },
    TrickExample {
        id: "arrays-zip-arrays",
        title: "Zip Arrays",
        description: "Combine arrays element by element",
        code: r#"const zip = (...arrays) =>
  Array.from({length: Math.max(...arrays.map(a => a.length))}, (_, i) =>
    arrays.map(arr => arr[i])
  );
const zipped = zip([1, 2, 3], ['a', 'b', 'c'], [true, false, true])"#,
        result: Some("[[1, 'a', true], [2, 'b', false], [3, 'c', true]]"),
        explanation: "Array.from() creates array of tuples, Math.max() finds longest array length",
    },
    TrickExample {
        id: "arrays-array-sliding-window",
        title: "Array Sliding Window",
        description: "Process array with sliding window",
        code: r#"const slidingWindow = (arr, size) =>
  Array.from({length: arr.length - size + 1}, (_, i) =>
    arr.slice(i, i + size)
  );
const windows = slidingWindow([1, 2, 3, 4, 5], 3)"#,
        result: Some("[[1, 2, 3], [2, 3, 4], [3, 4, 5]]"),
        explanation: "Array.from() creates windows of specified size, slice() extracts each window",
    },
    TrickExample {
        id: "arrays-run-length-encoding",
        title: "Run-Length Encoding",
        description: "Compress array by counting consecutive elements",
        code: r#"const runLengthEncode = (arr) =>
  arr.reduce((acc, val) => {
    const last = acc[acc.length - 1];
    if (last && last[0] === val) {
      last[1]++;
    } else {
      acc.push([val, 1]);
    }
    return acc;
  }, []);
const encoded = runLengthEncode(['a', 'a', 'b', 'b', 'b', 'c'])"#,
        result: Some("[['a', 2], ['b', 3], ['c', 1]]"),
        explanation: "reduce() groups consecutive identical elements with their counts",
    },
];

pub static TIPS: &[&str] = &[
    "Performance: Use Set for unique values, reduce() for aggregations",
    "Readability: Consider breaking complex one-liners into multiple lines",
    "Immutability: Use spread operator and array methods that return new arrays",
    "Edge Cases: Always handle empty arrays and null/undefined values",
];
