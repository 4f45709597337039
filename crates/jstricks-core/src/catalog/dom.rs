//! Browser DOM tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "dom-query-selector-shorthand",
        title: "Query Selector Shorthand",
        description: "jQuery-style element selection",
        code: r#"const $ = sel => document.querySelector(sel);
const $$ = sel => [...document.querySelectorAll(sel)];
const buttons = $$('button.primary')"#,
        result: Some("Array of matching elements"),
        explanation: "Short aliases for the verbose querySelector APIs, spread converts NodeList to array",
    },
    TrickExample {
        id: "dom-event-delegation",
        title: "Event Delegation",
        description: "Handle events for dynamic children on a parent",
        code: r#"document.querySelector('ul').addEventListener('click', e => {
  if (e.target.matches('li')) {
    console.log('Clicked:', e.target.textContent);
  }
})"#,
        result: Some("One listener handles all list items"),
        explanation: "Events bubble up, matches() filters for the intended target - works for elements added later",
    },
    TrickExample {
        id: "dom-toggle-class",
        title: "Toggle Class",
        description: "Add or remove a class in one call",
        code: "element.classList.toggle('active')",
        result: Some("true if the class was added"),
        explanation: "classList.toggle() adds the class if absent, removes it if present",
    },
    TrickExample {
        id: "dom-smooth-scroll-to-element",
        title: "Smooth Scroll to Element",
        description: "Animate scrolling to an element",
        code: "document.querySelector('#section').scrollIntoView({ behavior: 'smooth' })",
        result: Some("Viewport scrolls smoothly"),
        explanation: "scrollIntoView with behavior: 'smooth' animates instead of jumping",
    },
];
