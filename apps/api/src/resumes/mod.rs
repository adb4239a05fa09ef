// Resume document API: field validation, persistence operations, handlers.
// Validation runs before any store call — invalid payloads never reach MongoDB.

pub mod handlers;
pub mod store;
pub mod validation;
