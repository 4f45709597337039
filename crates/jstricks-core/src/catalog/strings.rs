//! String processing tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "strings-reverse-string",
        title: "Reverse String",
        description: "Reverse a string using array methods",
        code: "const reversed = 'hello'.split('').reverse().join('')",
        result: Some("'olleh'"),
        explanation: "split('') converts to array, reverse() reverses, join('') converts back to string",
    },
    TrickExample {
        id: "strings-capitalize-first-letter",
        title: "Capitalize First Letter",
        description: "Capitalize the first character",
        code: "const capitalized = str.charAt(0).toUpperCase() + str.slice(1)",
        result: Some("'Hello world'"),
        explanation: "charAt(0) gets first char, toUpperCase() capitalizes, slice(1) gets rest of string",
    },
    TrickExample {
        id: "strings-title-case",
        title: "Title Case",
        description: "Capitalize first letter of each word",
        code: r#"const titleCase = str => str.replace(/\b\w/g, l => l.toUpperCase());
const result = titleCase('hello world example')"#,
        result: Some("'Hello World Example'"),
        explanation: "Regex \\b\\w matches word boundaries and first letter, replace() capitalizes each",
    },
    TrickExample {
        id: "strings-check-palindrome",
        title: "Check Palindrome",
        description: "Check if string reads the same forwards and backwards",
        code: r#"const isPalindrome = str => str === str.split('').reverse().join('');
const result = isPalindrome('racecar')"#,
        result: Some("true"),
        explanation: "Compare original string with its reverse",
    },
    TrickExample {
        id: "strings-truncate-with-ellipsis",
        title: "Truncate with Ellipsis",
        description: "Truncate long string with ...",
        code: r#"const truncate = (str, maxLen) => str.length > maxLen ? str.slice(0, maxLen) + '...' : str;
const result = truncate('This is a very long string', 15)"#,
        result: Some("'This is a very ...'"),
        explanation: "Ternary operator checks length, slice() cuts string, concatenates '...'",
    },
    TrickExample {
        id: "strings-count-characters",
        title: "Count Characters",
        description: "Count occurrences of each character",
        code: r#"const charCount = str => [...str].reduce((acc, char) => {
  acc[char] = (acc[char] || 0) + 1;
  return acc;
}, {});
const result = charCount('hello')"#,
        result: Some("{ h: 1, e: 1, l: 2, o: 1 }"),
        explanation: "Spread string to array, reduce() builds frequency object",
    },
    TrickExample {
        id: "strings-remove-duplicate-characters",
        title: "Remove Duplicate Characters",
        description: "Remove duplicate characters from string",
        code: "const unique = [...new Set('hello')].join('')",
        result: Some("'helo'"),
        explanation: "Set removes duplicates, spread converts to array, join() back to string",
    },
    TrickExample {
        id: "strings-check-anagram",
        title: "Check Anagram",
        description: "Check if two strings are anagrams",
        code: r#"const isAnagram = (s1, s2) => s1.split('').sort().join('') === s2.split('').sort().join('');
const result = isAnagram('listen', 'silent')"#,
        result: Some("true"),
        explanation: "Sort both strings and compare - anagrams have same sorted characters",
    },
    TrickExample {
        id: "strings-extract-numbers",
        title: "Extract Numbers",
        description: "Extract all numbers from string",
        code: r#"const numbers = 'I have 2 cats and 3 dogs'.match(/\d+/g).map(Number)"#,
        result: Some("[2, 3]"),
        explanation: "Regex \\d+ matches one or more digits, map(Number) converts to numbers",
    },
    TrickExample {
        id: "strings-generate-slug",
        title: "Generate Slug",
        description: "Convert string to URL-friendly slug",
        code: r#"const slugify = str => str
  .toLowerCase()
  .trim()
  .replace(/[^\w\s-]/g, '')
  .replace(/[\s_-]+/g, '-')
  .replace(/^-+|-+$/g, '');
const result = slugify('Hello World!')"#,
        result: Some("'hello-world'"),
        explanation: "Chain of replace() operations: lowercase, remove special chars, replace spaces with hyphens, trim hyphens",
    },
    TrickExample {
        id: "strings-mask-string",
        title: "Mask String",
        description: "Mask all characters except last n",
        code: r#"const mask = (str, n = 4) => '*'.repeat(str.length - n) + str.slice(-n);
const result = mask('1234567890')"#,
        result: Some("'******7890'"),
        explanation: "repeat() creates asterisks for masked part, slice(-n) gets last n characters",
    },
    TrickExample {
        id: "strings-format-phone-number",
        title: "Format Phone Number",
        description: "Format string as phone number",
        code: r#"const formatPhone = s => s.replace(/(\d{3})(\d{3})(\d{4})/, '($1) $2-$3');
const result = formatPhone('5551234567')"#,
        result: Some("'(555) 123-4567'"),
        explanation: "Regex captures 3 groups of digits, replace() formats with parentheses and hyphens",
    },
    TrickExample {
        id: "strings-convert-to-camel-case",
        title: "Convert to Camel Case",
        description: "Convert kebab-case or snake_case to camelCase",
        code: r#"const toCamelCase = str => str.replace(/[-_](\w)/g, (_, c) => c.toUpperCase());
const result = toCamelCase('hello-world_example')"#,
        result: Some("'helloWorldExample'"),
        explanation: "Regex matches hyphen/underscore followed by word character, replace() capitalizes the word character",
    },
    TrickExample {
        id: "strings-pad-string",
        title: "Pad String",
        description: "Pad string to specified length",
        code: r#"const pad = (str, length, char = ' ') => str.padStart(length, char);
const result = pad('42', 5, '0')"#,
        result: Some("'00042'"),
        explanation: "padStart() adds characters to beginning until string reaches specified length",
    },
    TrickExample {
        id: "strings-word-count",
        title: "Word Count",
        description: "Count words in string",
        code: r#"const wordCount = str => str.trim().split(/\s+/).length;
const result = wordCount('  hello   world  example  ')"#,
        result: Some("3"),
        explanation: "trim() removes leading/trailing spaces, split(/\\s+/) splits on one or more whitespace characters",
    },
];

pub static TIPS: &[&str] = &[
    "Performance: Use string methods over regex when possible for better performance",
    "Unicode: Be careful with Unicode characters - use spread operator for proper character iteration",
    "Regex: Use regex flags like 'g' for global matching, 'i' for case-insensitive",
    "Immutability: String methods return new strings - original string is never modified",
];
