//! Testing utilities for Dragmark.
//!
//! Provides deterministic stand-ins for every host capability the library
//! consumes — a recording receiver, a virtual-time tick scheduler, a clamped
//! scroll host — plus a robot-style driver that walks a
//! `DragSelectTouchHandler` through complete gestures.

pub mod receiver;
pub mod robot;
pub mod scheduler;
pub mod scroll;

pub use receiver::RecordingReceiver;
pub use robot::DragRobot;
pub use scheduler::ManualTickScheduler;
pub use scroll::TestScrollHost;
