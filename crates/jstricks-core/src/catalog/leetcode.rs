//! Competitive programming and algorithm tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "leetcode-two-pointers-technique",
        title: "Two Pointers Technique",
        description: "Efficient array traversal with two pointers",
        code: r#"// Find pair that sums to target in sorted array
const twoSum = (arr, target) => {
  let left = 0, right = arr.length - 1;
  while (left < right) {
    const sum = arr[left] + arr[right];
    if (sum === target) return [left, right];
    if (sum < target) left++;
    else right--;
  }
  return [-1, -1];
};
const result = twoSum([1, 2, 3, 4, 6], 6);"#,
        result: Some("[1, 3]"),
        explanation: "Uses two pointers moving from opposite ends, O(n) time complexity",
    },
    TrickExample {
        id: "leetcode-sliding-window",
        title: "Sliding Window",
        description: "Maintain a dynamic range of elements",
        code: r#"// Find maximum sum of k consecutive elements
const maxSumSubarray = (arr, k) => {
  let maxSum = 0, currentSum = 0;
  for (let i = 0; i < k; i++) currentSum += arr[i];
  maxSum = currentSum;

  for (let i = k; i < arr.length; i++) {
    currentSum = currentSum - arr[i - k] + arr[i];
    maxSum = Math.max(maxSum, currentSum);
  }
  return maxSum;
};
const result = maxSumSubarray([1, 4, 2, 10, 2, 3, 1, 0, 20], 4);"#,
        result: Some("24"),
        explanation: "Maintains a window of k elements, slides it to find maximum sum",
    },
    TrickExample {
        id: "leetcode-binary-search",
        title: "Binary Search",
        description: "Efficient search in sorted arrays",
        code: r#"const binarySearch = (arr, target) => {
  let left = 0, right = arr.length - 1;
  while (left <= right) {
    const mid = Math.floor((left + right) / 2);
    if (arr[mid] === target) return mid;
    if (arr[mid] < target) left = mid + 1;
    else right = mid - 1;
  }
  return -1;
};
const result = binarySearch([1, 3, 5, 7, 9, 11], 7);"#,
        result: Some("3"),
        explanation: "Divides search space in half each iteration, O(log n) time complexity",
    },
    TrickExample {
        id: "leetcode-depth-first-search-dfs",
        title: "Depth First Search (DFS)",
        description: "Traverse tree/graph using recursion",
        code: r#"const dfs = (node, result = []) => {
  if (!node) return result;
  result.push(node.val); // Pre-order
  dfs(node.left, result);
  dfs(node.right, result);
  return result;
};
const tree = {
  val: 1,
  left: { val: 2, left: { val: 4 }, right: { val: 5 } },
  right: { val: 3 }
};
const result = dfs(tree);"#,
        result: Some("[1, 2, 4, 5, 3]"),
        explanation: "Uses recursion to explore as far as possible along each branch",
    },
    TrickExample {
        id: "leetcode-breadth-first-search-bfs",
        title: "Breadth First Search (BFS)",
        description: "Level-by-level traversal using queue",
        code: r#"const bfs = (root) => {
  if (!root) return [];
  const queue = [root];
  const result = [];

  while (queue.length > 0) {
    const node = queue.shift();
    result.push(node.val);
    if (node.left) queue.push(node.left);
    if (node.right) queue.push(node.right);
  }
  return result;
};
const tree = {
  val: 1,
  left: { val: 2, left: { val: 4 }, right: { val: 5 } },
  right: { val: 3 }
};
const result = bfs(tree);"#,
        result: Some("[1, 2, 3, 4, 5]"),
        explanation: "Uses queue to process all nodes at current level before moving to next",
    },
    TrickExample {
        id: "leetcode-dynamic-programming-memoization",
        title: "Dynamic Programming - Memoization",
        description: "Cache subproblem results",
        code: r#"// Fibonacci with memoization
const fibMemo = (n, memo = {}) => {
  if (n in memo) return memo[n];
  if (n <= 1) return n;

  memo[n] = fibMemo(n - 1, memo) + fibMemo(n - 2, memo);
  return memo[n];
};
const result = fibMemo(10);"#,
        result: Some("55"),
        explanation: "Caches subproblem results, turning exponential recursion into linear time",
    },
];

pub static TIPS: &[&str] = &[
    "Two Pointers: Perfect for sorted arrays and palindrome problems",
    "Sliding Window: Great for subarray/substring problems",
    "Binary Search: Always works on sorted data, O(log n) time",
    "DFS vs BFS: DFS for deep exploration, BFS for level-order",
    "Dynamic Programming: Memoization (top-down) vs Tabulation (bottom-up)",
    "Hash Maps: Trade space for time, O(1) lookups",
    "Stacks: Perfect for parentheses, monotonic properties",
    "Union Find: Efficient for connected components problems",
];
