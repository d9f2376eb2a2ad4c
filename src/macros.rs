//! Level macros and the crash-on-failure assertion

use std::io;

use crate::console::Console;
use crate::level::Level;
use crate::logger::Logger;
use crate::render::Render;

/// Log values at fatal severity as one line.
///
/// Arguments are rendered in order with no separator between them:
/// `fatal!("chunk ", coord, " failed to mesh")`. When the fatal level is
/// compiled out the call folds away and the arguments are never evaluated.
#[macro_export]
macro_rules! fatal {
    ($($value:expr),+ $(,)?) => {
        if $crate::enabled($crate::Level::Fatal) {
            $crate::__log($crate::Level::Fatal, true, &[$(&$value as &dyn $crate::Render),+]);
        }
    };
}

/// Log values at error severity as one line. See [`fatal!`](crate::fatal).
#[macro_export]
macro_rules! error {
    ($($value:expr),+ $(,)?) => {
        if $crate::enabled($crate::Level::Error) {
            $crate::__log($crate::Level::Error, true, &[$(&$value as &dyn $crate::Render),+]);
        }
    };
}

/// Log values at warn severity as one line. See [`fatal!`](crate::fatal).
#[macro_export]
macro_rules! warn {
    ($($value:expr),+ $(,)?) => {
        if $crate::enabled($crate::Level::Warn) {
            $crate::__log($crate::Level::Warn, true, &[$(&$value as &dyn $crate::Render),+]);
        }
    };
}

/// Log values at info severity as one line. See [`fatal!`](crate::fatal).
#[macro_export]
macro_rules! info {
    ($($value:expr),+ $(,)?) => {
        if $crate::enabled($crate::Level::Info) {
            $crate::__log($crate::Level::Info, true, &[$(&$value as &dyn $crate::Render),+]);
        }
    };
}

/// Assert a condition, crashing the process on failure.
///
/// On a false condition this logs the failure banner, the condition's
/// source text, any message values (rendered like log arguments), and the
/// trimmed source location, all at fatal severity -- then aborts the
/// process. The abort is deliberate: the fault surfaces at the failure
/// point under a debugger rather than unwinding past it.
///
/// On a true condition nothing is evaluated, nothing is written, and
/// execution continues.
#[macro_export]
macro_rules! ember_assert {
    ($cond:expr $(,)?) => {
        if !($cond) {
            $crate::__assert_fail(stringify!($cond), file!(), line!(), &[]);
        }
    };
    ($cond:expr, $($message:expr),+ $(,)?) => {
        if !($cond) {
            $crate::__assert_fail(
                stringify!($cond),
                file!(),
                line!(),
                &[$(&$message as &dyn $crate::Render),+],
            );
        }
    };
}

const BANNER_RULE: &str = "-------------------------";
const BANNER_TEXT: &str = "    ASSERTION FAILED!    ";

/// Strip a source path down to its final component.
///
/// Handles both separator styles, so `src/voxel/world.rs` and
/// `src\voxel\world.rs` both trim to `world.rs`.
pub fn trim_source_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Write the assertion-failure diagnostic to `logger` without aborting.
///
/// The `ember_assert!` macro routes through this before terminating; it is
/// exposed separately so the diagnostic format is testable.
pub fn report_assertion<C: Console>(
    logger: &mut Logger<C>,
    condition: &str,
    file: &str,
    line: u32,
    message: &[&dyn Render],
) -> io::Result<()> {
    logger.log(Level::Fatal, true, &[&BANNER_RULE])?;
    logger.log(Level::Fatal, true, &[&BANNER_TEXT])?;
    logger.log(Level::Fatal, true, &[&BANNER_RULE])?;
    logger.log(Level::Fatal, true, &[&condition])?;
    if !message.is_empty() {
        logger.log(Level::Fatal, true, message)?;
    }
    let file = trim_source_file(file);
    logger.log(Level::Fatal, true, &[&"-> ", &file, &":", &line])?;
    Ok(())
}

/// Failure path of `ember_assert!`. Not public API.
#[doc(hidden)]
pub fn __assert_fail(condition: &str, file: &str, line: u32, message: &[&dyn Render]) -> ! {
    crate::logger::with_global(|logger| {
        let _ = report_assertion(logger, condition, file, line, message);
    });
    std::process::abort();
}
