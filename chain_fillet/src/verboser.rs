use crate::{fillet::SkipReason, FilletReport};

pub enum Message<T> {
    Rounded { index: usize, bulge: T },
    Skipped { index: usize, reason: SkipReason },
    Finished(FilletReport),
}

pub trait Verboser<T> {
    fn verbose(&mut self, message: Message<T>);
}

pub struct Silent;

impl<T> Verboser<T> for Silent {
    fn verbose(&mut self, _: Message<T>) {}
}

/// Forwards every message to the `log` facade.
pub struct Logger;

impl<T: std::fmt::Display> Verboser<T> for Logger {
    fn verbose(&mut self, message: Message<T>) {
        match message {
            Message::Rounded { index, bulge } => {
                log::debug!("Rounded corner {index} (bulge {bulge})")
            }
            Message::Skipped { index, reason } => {
                log::trace!("Skipped corner {index}: {reason}")
            }
            Message::Finished(report) => log::info!("{report}"),
        }
    }
}
