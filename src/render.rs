//! Value-to-text rendering for log lines
//!
//! Every argument of a log statement goes through [`Render`], which appends
//! the value's text form to a [`LineBuffer`]. Classification is per concrete
//! type, fixed at compile time:
//!
//! - textual values (`str`, `String`, `char`) are appended unchanged;
//! - containers render as `"Container of size: <n>, contents: <e1>, <e2>"`,
//!   recursing per element;
//! - 2-tuples render as `"(Key: <k>, Value: <v>)"`;
//! - scalars render in decimal form via `core::fmt`;
//! - anything else is wrapped in [`Unsupported`] for a placeholder naming
//!   the type.
//!
//! Heterogeneous argument lists are carried as `&[&dyn Render]`; values are
//! appended in argument order with no separator between them.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Write as _;

use crate::buffer::LineBuffer;

/// A value the formatter can turn into text.
pub trait Render {
    /// Append this value's text form to `out`.
    fn render(&self, out: &mut LineBuffer);
}

/// Render each value in order into `out`, with no separator between values.
///
/// Separators, if wanted, must be passed as explicit text arguments.
pub fn render_values(out: &mut LineBuffer, values: &[&dyn Render]) {
    for value in values {
        value.render(out);
    }
}

/// Render a value sequence into a fresh `String`. Convenience for callers
/// that do not manage their own [`LineBuffer`].
pub fn render_to_string(values: &[&dyn Render]) -> String {
    let mut out = LineBuffer::new();
    render_values(&mut out, values);
    out.as_str().to_string()
}

/// Render one or more values into a [`LineBuffer`], in argument order.
///
/// ```
/// use emberlog::{render, LineBuffer};
///
/// let mut line = LineBuffer::new();
/// render!(&mut line, "count=", 5);
/// assert_eq!(line.as_str(), "count=5");
/// ```
#[macro_export]
macro_rules! render {
    ($buffer:expr, $($value:expr),+ $(,)?) => {
        $crate::render::render_values($buffer, &[$(&$value as &dyn $crate::Render),+])
    };
}

// ---- Textual ----

impl Render for str {
    fn render(&self, out: &mut LineBuffer) {
        out.push_str(self);
    }
}

impl Render for String {
    fn render(&self, out: &mut LineBuffer) {
        out.push_str(self);
    }
}

impl Render for char {
    // Exactly one character, never the bytes that happen to follow it.
    fn render(&self, out: &mut LineBuffer) {
        out.push_char(*self);
    }
}

// References classify the same as the value they point at, so borrowed
// arguments and map iteration items need no impls of their own.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut LineBuffer) {
        (**self).render(out);
    }
}

// ---- Scalars ----

macro_rules! impl_render_scalar {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                fn render(&self, out: &mut LineBuffer) {
                    // Writes into LineBuffer never fail
                    let _ = write!(out, "{}", self);
                }
            }
        )+
    };
}

impl_render_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool
);

// ---- Containers ----

fn render_container<I>(out: &mut LineBuffer, len: usize, elements: I)
where
    I: IntoIterator,
    I::Item: Render,
{
    out.push_str("Container of size: ");
    let _ = write!(out, "{}", len);
    out.push_str(", contents: ");
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        element.render(out);
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, N, self.iter());
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

impl<T: Render> Render for HashSet<T> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

// Map entries recurse through the pair form below.
impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

impl<K: Render, V: Render> Render for HashMap<K, V> {
    fn render(&self, out: &mut LineBuffer) {
        render_container(out, self.len(), self.iter());
    }
}

// ---- Pairs ----

impl<K: Render, V: Render> Render for (K, V) {
    fn render(&self, out: &mut LineBuffer) {
        out.push_str("(Key: ");
        self.0.render(out);
        out.push_str(", Value: ");
        self.1.render(out);
        out.push_char(')');
    }
}

// ---- Fallback ----

/// Adapter for values without a [`Render`] impl.
///
/// Renders a placeholder naming the wrapped type instead of its value, so a
/// log statement degrades gracefully rather than failing to say anything:
///
/// ```
/// use emberlog::{render::render_to_string, Unsupported};
///
/// struct Widget;
/// let w = Widget;
/// let text = render_to_string(&[&Unsupported(&w)]);
/// assert!(text.contains("Widget"));
/// ```
pub struct Unsupported<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Render for Unsupported<'_, T> {
    fn render(&self, out: &mut LineBuffer) {
        out.push_str("[Unsupported type (");
        out.push_str(std::any::type_name::<T>());
        out.push_str(")!]");
    }
}
