//! Routed page components.
//!
//! Pages stay thin: forms collect input, hand it to the session store, and
//! render whatever error the API propagated. Access control lives in the
//! route guard, not here.

pub mod admin_dashboard;
pub mod dashboard;
pub mod login;
pub mod register;
