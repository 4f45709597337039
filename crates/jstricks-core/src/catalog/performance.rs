//! Performance and debugging tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "performance-debounce-function",
        title: "Debounce Function",
        description: "Limit function execution frequency",
        code: r#"const debounce = (func, delay) => {
  let timeoutId;
  return (...args) => {
    clearTimeout(timeoutId);
    timeoutId = setTimeout(() => func.apply(this, args), delay);
  };
};
const debouncedSearch = debounce((query) => console.log('Searching:', query), 300);"#,
        result: Some("Function returned (debounced version)"),
        explanation: "Prevents excessive function calls by delaying execution until user stops typing",
    },
    TrickExample {
        id: "performance-throttle-function",
        title: "Throttle Function",
        description: "Execute function at most once per time period",
        code: r#"const throttle = (func, limit) => {
  let inThrottle;
  return (...args) => {
    if (!inThrottle) {
      func.apply(this, args);
      inThrottle = true;
      setTimeout(() => inThrottle = false, limit);
    }
  };
};
const throttledScroll = throttle(() => console.log('Scrolled!'), 100);"#,
        result: Some("Function returned (throttled version)"),
        explanation: "Ensures function runs at most once per specified time interval",
    },
    TrickExample {
        id: "performance-memoization",
        title: "Memoization",
        description: "Cache expensive function results",
        code: r#"const memoize = (fn) => {
  const cache = new Map();
  return (...args) => {
    const key = JSON.stringify(args);
    if (cache.has(key)) return cache.get(key);
    const result = fn(...args);
    cache.set(key, result);
    return result;
  };
};
const expensiveFn = memoize((n) => {
  console.log('Computing...');
  return n * n;
});"#,
        result: Some("Function returned (memoized version)"),
        explanation: "Stores function results in cache to avoid recalculating same inputs",
    },
    TrickExample {
        id: "performance-virtual-scrolling",
        title: "Virtual Scrolling",
        description: "Render only visible items",
        code: r#"const virtualScroll = (items, itemHeight, containerHeight) => {
  const visibleCount = Math.ceil(containerHeight / itemHeight);
  const scrollTop = 0; // Would be from scroll event
  const startIndex = Math.floor(scrollTop / itemHeight);
  const endIndex = Math.min(startIndex + visibleCount, items.length);
  return items.slice(startIndex, endIndex);
};"#,
        result: Some("Function returned"),
        explanation: "Only renders items currently visible in viewport for large lists",
    },
    TrickExample {
        id: "performance-performance-monitoring",
        title: "Performance Monitoring",
        description: "Measure execution time and memory usage",
        code: r#"const performanceMonitor = {
  time(label) {
    console.time(label);
    return () => console.timeEnd(label);
  },

  memory() {
    if (performance.memory) {
      const mem = performance.memory;
      return {
        used: Math.round(mem.usedJSHeapSize / 1048576) + ' MB',
        total: Math.round(mem.totalJSHeapSize / 1048576) + ' MB',
        limit: Math.round(mem.jsHeapSizeLimit / 1048576) + ' MB'
      };
    }
    return 'Memory API not available';
  }
};"#,
        result: Some("Object defined"),
        explanation: "Tools to measure and monitor application performance",
    },
    TrickExample {
        id: "performance-intersection-observer",
        title: "Intersection Observer",
        description: "Efficiently detect element visibility",
        code: r#"const observeVisibility = (element, callback) => {
  const observer = new IntersectionObserver((entries) => {
    entries.forEach(entry => {
      if (entry.isIntersecting) {
        callback(entry.target);
      }
    });
  });
  observer.observe(element);
  return observer;
};"#,
        result: Some("Function returned"),
        explanation: "Efficiently detects when elements enter/exit viewport without scroll events",
    },
];

pub static TIPS: &[&str] = &[
    "Debounce vs Throttle: Use debounce for search, throttle for scroll events",
    "Memory Management: Always clean up event listeners and timers",
    "Lazy Loading: Load resources only when needed",
    "Web Workers: Move heavy computations to background threads",
    "Virtual Scrolling: Essential for large lists (1000+ items)",
    "Code Splitting: Reduce initial bundle size with dynamic imports",
];
