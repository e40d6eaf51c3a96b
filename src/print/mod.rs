//! Capability-dispatch printing
//!
//! Renders payloads without asking them to implement a shared rendering trait:
//! - a type implementing [`Display`] is printed verbatim;
//! - any other type implementing [`PayloadSize`] is summarised as `size=<N>`.
//!
//! The choice is made at compile time. [`print_buffer!`](crate::print_buffer)
//! relies on method resolution preferring a by-reference impl over an
//! auto-referenced one, so the `Display` path wins whenever it applies and no
//! runtime type inspection takes place. Because the decision needs the concrete
//! type, both macros must be expanded where that type is known (not inside a
//! function generic over the payload).
//!
//! ```
//! use bytes::Bytes;
//! use zk_results::print_buffer;
//! use zk_results::print_range;
//!
//! let mut out = String::new();
//! print_buffer!(&mut out, Bytes::from_static(b"abc")).unwrap();
//! out.push(' ');
//! print_buffer!(&mut out, "abc").unwrap();
//! out.push(' ');
//! print_range!(&mut out, ["a", "b"]).unwrap();
//! assert_eq!(out, "size=3 abc [a, b]");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write;

use bytes::Bytes;
use bytes::BytesMut;

/// Element count of a payload, used when it has no textual form of its own.
pub trait PayloadSize {
    fn payload_size(&self) -> usize;
}

impl<T: PayloadSize + ?Sized> PayloadSize for &T {
    fn payload_size(&self) -> usize {
        (**self).payload_size()
    }
}

impl<T> PayloadSize for [T] {
    fn payload_size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> PayloadSize for [T; N] {
    fn payload_size(&self) -> usize {
        N
    }
}

impl<T> PayloadSize for Vec<T> {
    fn payload_size(&self) -> usize {
        self.len()
    }
}

impl<T> PayloadSize for VecDeque<T> {
    fn payload_size(&self) -> usize {
        self.len()
    }
}

impl PayloadSize for Bytes {
    fn payload_size(&self) -> usize {
        self.len()
    }
}

impl PayloadSize for BytesMut {
    fn payload_size(&self) -> usize {
        self.len()
    }
}

#[doc(hidden)]
pub struct Dispatch<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait RenderNative {
    fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result;
}

impl<T: Display + ?Sized> RenderNative for Dispatch<'_, T> {
    fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

#[doc(hidden)]
pub trait RenderSize {
    fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result;
}

impl<T: PayloadSize + ?Sized> RenderSize for &Dispatch<'_, T> {
    fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result {
        write!(out, "size={}", self.0.payload_size())
    }
}

/// Writes `range` as `[a, b, c]`, handing every element to `each`.
///
/// Used by [`print_range!`](crate::print_range); call it directly when the
/// element type is known to implement `Display`.
pub fn write_range<W, I, F>(
    out: &mut W,
    range: I,
    mut each: F,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> fmt::Result,
{
    out.write_char('[')?;
    let mut first = true;
    for x in range {
        if first {
            first = false;
        } else {
            out.write_str(", ")?;
        }
        each(&mut *out, x)?;
    }
    out.write_char(']')
}

/// Prints a payload into a [`fmt::Write`] sink, verbatim if it implements
/// `Display`, as `size=<N>` otherwise.
#[macro_export]
macro_rules! print_buffer {
    ($out:expr, $buf:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::print::RenderNative as _;
        #[allow(unused_imports)]
        use $crate::print::RenderSize as _;
        (&$crate::print::Dispatch(&$buf)).render($out)
    }};
}

/// Prints any iterable as `[a, b, c]`, dispatching each element like
/// [`print_buffer!`](crate::print_buffer).
#[macro_export]
macro_rules! print_range {
    ($out:expr, $range:expr $(,)?) => {
        $crate::print::write_range($out, $range, |out, x| $crate::print_buffer!(out, x))
    };
}
