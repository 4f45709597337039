//! Time and formatting tricks

use crate::types::TrickExample;

pub static EXAMPLES: &[TrickExample] = &[
    TrickExample {
        id: "time-digital-clock-with-padstart",
        title: "Digital Clock with padStart",
        description: "Always show 2 digits for hours, minutes, seconds",
        code: r#"const formatDigitalClock = () => {
  const time = new Date();
  const hours = String(time.getHours()).padStart(2, '0');
  const minutes = String(time.getMinutes()).padStart(2, '0');
  const seconds = String(time.getSeconds()).padStart(2, '0');
  return `${hours}:${minutes}:${seconds}`;
};"#,
        result: Some("'09:05:03'"),
        explanation: "padStart ensures consistent 2-digit formatting for all time components",
    },
    TrickExample {
        id: "time-12-hour-format-with-am-pm",
        title: "12-Hour Format with AM/PM",
        description: "Convert 24-hour to 12-hour format",
        code: r#"const format12Hour = (hour) => {
  const hour12 = hour % 12 || 12;
  const ampm = hour < 12 ? 'AM' : 'PM';
  return `${String(hour12).padStart(2, '0')} ${ampm}`;
};
format12Hour(15)"#,
        result: Some("'03 PM'"),
        explanation: "Converts 24-hour format to 12-hour with proper AM/PM designation",
    },
    TrickExample {
        id: "time-countdown-timer-format",
        title: "Countdown Timer Format",
        description: "Format seconds into HH:MM:SS",
        code: r#"const formatCountdown = (seconds) => {
  const hours = Math.floor(seconds / 3600);
  const minutes = Math.floor((seconds % 3600) / 60);
  const secs = seconds % 60;

  return [hours, minutes, secs]
    .map(n => String(n).padStart(2, '0'))
    .join(':');
};
formatCountdown(3661)"#,
        result: Some("'01:01:01'"),
        explanation: "Converts total seconds into readable time format with leading zeros",
    },
    TrickExample {
        id: "time-relative-time-time-ago",
        title: "Relative Time (Time Ago)",
        description: "Show relative time like '2 hours ago'",
        code: r#"const timeAgo = (date) => {
  const seconds = Math.floor((Date.now() - date) / 1000);

  const intervals = {
    year: 31536000,
    month: 2592000,
    day: 86400,
    hour: 3600,
    minute: 60
  };

  for (const [unit, secondsInUnit] of Object.entries(intervals)) {
    const interval = Math.floor(seconds / secondsInUnit);
    if (interval >= 1) {
      return `${interval} ${unit}${interval > 1 ? 's' : ''} ago`;
    }
  }

  return 'just now';
};"#,
        result: Some("'2 hours ago'"),
        explanation: "Calculates relative time by comparing current time with past date",
    },
    TrickExample {
        id: "time-currency-formatting",
        title: "Currency Formatting",
        description: "Format numbers as currency",
        code: r#"const formatCurrency = (amount, currency = 'USD', locale = 'en-US') => {
  return new Intl.NumberFormat(locale, {
    style: 'currency',
    currency: currency
  }).format(amount);
};
formatCurrency(1234.56)"#,
        result: Some("'$1,234.56'"),
        explanation: "Uses Intl.NumberFormat for locale-aware currency formatting",
    },
    TrickExample {
        id: "time-add-thousand-separators",
        title: "Add Thousand Separators",
        description: "Insert commas into large numbers",
        code: r#"const addCommas = n => n.toLocaleString('en-US');
addCommas(1234567)"#,
        result: Some("'1,234,567'"),
        explanation: "toLocaleString() formats numbers with locale-appropriate grouping",
    },
    TrickExample {
        id: "time-file-size-formatting",
        title: "File Size Formatting",
        description: "Convert bytes to human-readable sizes",
        code: r#"const formatBytes = (bytes) => {
  if (bytes === 0) return '0 B';
  const units = ['B', 'KB', 'MB', 'GB', 'TB'];
  const i = Math.floor(Math.log(bytes) / Math.log(1024));
  return (bytes / Math.pow(1024, i)).toFixed(1) + ' ' + units[i];
};
formatBytes(1536000)"#,
        result: Some("'1.5 MB'"),
        explanation: "Logarithm picks the right unit, division scales the value",
    },
    TrickExample {
        id: "time-ordinal-numbers",
        title: "Ordinal Numbers",
        description: "Add st/nd/rd/th suffixes",
        code: r#"const ordinal = (n) => {
  const s = ['th', 'st', 'nd', 'rd'];
  const v = n % 100;
  return n + (s[(v - 20) % 10] || s[v] || s[0]);
};
ordinal(23)"#,
        result: Some("'23rd'"),
        explanation: "Lookup table handles the teens exception and the 1/2/3 endings",
    },
    TrickExample {
        id: "time-calculate-age-from-birthdate",
        title: "Calculate Age from Birthdate",
        description: "Compute age in years from a date",
        code: r#"const getAge = (birthdate) => {
  const today = new Date();
  const birth = new Date(birthdate);
  let age = today.getFullYear() - birth.getFullYear();
  const m = today.getMonth() - birth.getMonth();
  if (m < 0 || (m === 0 && today.getDate() < birth.getDate())) {
    age--;
  }
  return age;
};"#,
        result: Some("Age in whole years"),
        explanation: "Subtracts years, then corrects if the birthday hasn't happened yet this year",
    },
];
