/*!
Routines for placing civil dates on the timeline.

The central type of this module is [`TimezoneShift`], which describes how
the window of absolute time covered by a [`DateOnly`](crate::DateOnly) is
computed. A shift is either the host's local UTC offset, a fixed
[`Offset`], or the special "min-max" shift that moves the start back by 12
hours and the end forward by 14 hours.

Querying the host's UTC offset is abstracted behind the [`LocalOffset`]
trait. The default implementation, [`SystemOffset`], requires the
`tz-system` crate feature.
*/

pub use self::{
    offset::Offset,
    shift::TimezoneShift,
    system::{LocalOffset, SystemOffset},
};

mod offset;
mod shift;
mod system;
