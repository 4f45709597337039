//! Object operation tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "objects-swap-variables",
        title: "Swap Variables",
        description: "Swap two variables without temporary variable",
        code: "let a = 1, b = 2;\n[a, b] = [b, a];\nconsole.log(a, b)",
        result: Some("2 1"),
        explanation: "Array destructuring assignment swaps values in one line",
    },
    TrickExample {
        id: "objects-clone-object-shallow",
        title: "Clone Object (Shallow)",
        description: "Create shallow copy of object",
        code: "const clone = {...original}",
        result: Some("{ name: 'John', age: 30 }"),
        explanation: "Spread operator (...) creates new object with same properties",
    },
    TrickExample {
        id: "objects-clone-object-deep",
        title: "Clone Object (Deep)",
        description: "Deep clone object using JSON",
        code: "const deepClone = JSON.parse(JSON.stringify(obj))",
        result: Some("{ name: 'John', details: { age: 30, city: 'NYC' } }"),
        explanation: "JSON.stringify() converts to string, JSON.parse() converts back - creates completely new object",
    },
    TrickExample {
        id: "objects-dynamic-property-names",
        title: "Dynamic Property Names",
        description: "Use variables as object property names",
        code: "const prop = 'name';\nconst obj = { [prop]: 'value' }",
        result: Some("{ name: 'value' }"),
        explanation: "Computed property names use square brackets to evaluate expression as property name",
    },
    TrickExample {
        id: "objects-object-from-entries",
        title: "Object from Entries",
        description: "Create object from array of key-value pairs",
        code: "const obj = Object.fromEntries([['a', 1], ['b', 2]])",
        result: Some("{ a: 1, b: 2 }"),
        explanation: "Object.fromEntries() converts array of [key, value] pairs to object",
    },
    TrickExample {
        id: "objects-remove-property",
        title: "Remove Property",
        description: "Remove property using destructuring",
        code: r#"const user = { name: 'John', age: 30, password: 'secret' };
const {password, ...userWithoutPassword} = user"#,
        result: Some("{ name: 'John', age: 30 }"),
        explanation: "Destructuring with rest operator (...) extracts specific property and creates new object with remaining properties",
    },
    TrickExample {
        id: "objects-merge-objects",
        title: "Merge Objects",
        description: "Merge multiple objects",
        code: "const merged = {...obj1, ...obj2, ...obj3}",
        result: Some("{ a: 1, b: 3, c: 4, d: 5 }"),
        explanation: "Spread operator merges objects, later properties override earlier ones",
    },
    TrickExample {
        id: "objects-pick-properties",
        title: "Pick Properties",
        description: "Extract specific properties from object",
        code: r#"const pick = (obj, keys) => Object.fromEntries(keys.map(key => [key, obj[key]]));
const result = pick({a: 1, b: 2, c: 3}, ['a', 'c'])"#,
        result: Some("{ a: 1, c: 3 }"),
        explanation: "map() creates array of [key, value] pairs, Object.fromEntries() converts to object",
    },
    TrickExample {
        id: "objects-omit-properties",
        title: "Omit Properties",
        description: "Create object without specific properties",
        code: r#"const omit = (obj, keys) => Object.fromEntries(Object.entries(obj).filter(([k]) => !keys.includes(k)));
const result = omit({a: 1, b: 2, c: 3}, ['b'])"#,
        result: Some("{ a: 1, c: 3 }"),
        explanation: "Object.entries() converts to array, filter() removes unwanted keys, Object.fromEntries() converts back",
    },
    TrickExample {
        id: "objects-flatten-nested-object",
        title: "Flatten Nested Object",
        description: "Flatten nested object with dot notation",
        code: r#"const flatten = (obj, prefix = '') => Object.keys(obj).reduce((acc, k) => {
  const pre = prefix ? prefix + '.' : '';
  return obj[k]?.constructor === Object
    ? {...acc, ...flatten(obj[k], pre + k)}
    : {...acc, [pre + k]: obj[k]};
}, {});
const result = flatten({a: {b: {c: 1}}})"#,
        result: Some("{ 'a.b.c': 1 }"),
        explanation: "Recursive function that checks if value is object, flattens nested objects with dot notation",
    },
    TrickExample {
        id: "objects-invert-object",
        title: "Invert Object",
        description: "Swap keys and values",
        code: r#"const invert = obj => Object.fromEntries(Object.entries(obj).map(([k, v]) => [v, k]));
const result = invert({a: 1, b: 2})"#,
        result: Some("{ 1: 'a', 2: 'b' }"),
        explanation: "Object.entries() gets [key, value] pairs, map() swaps them, Object.fromEntries() creates new object",
    },
    TrickExample {
        id: "objects-check-if-object-is-empty",
        title: "Check if Object is Empty",
        description: "Check if object has no properties",
        code: "const isEmpty = obj => !Object.keys(obj).length",
        result: Some("{ empty: true, notEmpty: false }"),
        explanation: "Object.keys() returns array of keys, check if length is 0",
    },
    TrickExample {
        id: "objects-safe-property-access",
        title: "Safe Property Access",
        description: "Safely access nested properties",
        code: r#"const get = (obj, path, defaultValue) => path.split('.').reduce((o, p) => o?.[p], obj) ?? defaultValue;
const result = get({a: {b: {c: 1}}}, 'a.b.c', 'default')"#,
        result: Some("1"),
        explanation: "split() creates path array, reduce() traverses object, optional chaining (?.) prevents errors, nullish coalescing (??) provides default",
    },
    TrickExample {
        id: "objects-object-size",
        title: "Object Size",
        description: "Get number of properties in object",
        code: "const size = obj => Object.keys(obj).length",
        result: Some("3"),
        explanation: "Object.keys() returns array of keys, length gives count of properties",
    },
];

pub static TIPS: &[&str] = &[
    "Immutability: Spread and destructuring create new objects instead of mutating",
    "Deep vs Shallow: JSON clone drops functions, dates, and undefined values",
    "Optional Chaining: Use ?. and ?? to avoid 'cannot read property' errors",
];
