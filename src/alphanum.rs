//! Natural ("alphanumeric") ordering for file names.
//!
//! Embedded digit runs compare as numbers, so `ores_2.json` sorts before
//! `ores_10.json`. User overlay documents load in this order.

use std::cmp::Ordering;

/// Compare two file names under natural ordering.
///
/// This is a total order: distinct names never compare equal, so sorted
/// load order does not depend on directory enumeration order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let a_run = &a[i..digit_run_end(a, i)];
            let b_run = &b[j..digit_run_end(b, j)];
            let a_num = trim_leading_zeros(a_run);
            let b_num = trim_leading_zeros(b_run);
            // Numeric value first; equal values with different zero padding
            // fall back to the raw run so distinct names never tie.
            let ord = a_num
                .len()
                .cmp(&b_num.len())
                .then_with(|| a_num.cmp(b_num))
                .then_with(|| a_run.len().cmp(&b_run.len()));
            if ord != Ordering::Equal {
                return ord;
            }
            i += a_run.len();
            j += b_run.len();
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let first = digits.iter().position(|&d| d != b'0');
    match first {
        Some(index) => &digits[index..],
        // All zeros: keep one digit so "0" still compares as a number.
        None => &digits[digits.len() - 1..],
    }
}
