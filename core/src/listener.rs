//! Caller-facing listener shapes.
//!
//! Each shape is a success/failure pair consumed by value, so a listener
//! hears about a request exactly once. `R` is the delegate's response type.
//! A request whose listener is `None` still reaches the delegate; its outcome
//! is dropped.

use crate::error::ApiError;

/// The canonical two-case listener every request variant is lowered to.
pub trait RequestListener<R>: Send + 'static {
    fn on_response(self, response: R);

    fn on_failure(self, error: ApiError);
}

/// Receives one entity of type `T` parsed from the response.
pub trait EntityListener<T, R>: Send + 'static {
    fn result(self, code: i32, message: String, entity: Option<T>, response: R);

    fn failure(self, error: ApiError);
}

/// Receives a list of `T` parsed from the response.
pub trait EntityListListener<T, R>: Send + 'static {
    fn result(self, code: i32, message: String, entities: Vec<T>, response: R);

    fn failure(self, error: ApiError);
}

/// Receives the raw payload text of the response.
pub trait StringListener<R>: Send + 'static {
    fn result(self, code: i32, message: String, data: String, response: R);

    fn failure(self, error: ApiError);
}

/// Receives only code and message.
pub trait DefaultListener<R>: Send + 'static {
    fn result(self, code: i32, message: String, response: R);

    fn failure(self, error: ApiError);
}

/// A listener built from two closures.
///
/// `on_result` decides which shape it satisfies: a closure taking
/// `(i32, String, Option<T>, R)` is an [`EntityListener`], one taking
/// `(i32, String, Vec<T>, R)` an [`EntityListListener`], and so on. Annotate
/// the closure parameters so the shape is unambiguous.
pub struct Callbacks<S, F> {
    on_result: S,
    on_failure: F,
}

pub fn callbacks<S, F>(on_result: S, on_failure: F) -> Callbacks<S, F>
where
    F: FnOnce(ApiError) + Send + 'static,
{
    Callbacks {
        on_result,
        on_failure,
    }
}

impl<R, S, F> RequestListener<R> for Callbacks<S, F>
where
    S: FnOnce(R) + Send + 'static,
    F: FnOnce(ApiError) + Send + 'static,
{
    fn on_response(self, response: R) {
        (self.on_result)(response)
    }

    fn on_failure(self, error: ApiError) {
        (self.on_failure)(error)
    }
}

impl<T, R, S, F> EntityListener<T, R> for Callbacks<S, F>
where
    S: FnOnce(i32, String, Option<T>, R) + Send + 'static,
    F: FnOnce(ApiError) + Send + 'static,
{
    fn result(self, code: i32, message: String, entity: Option<T>, response: R) {
        (self.on_result)(code, message, entity, response)
    }

    fn failure(self, error: ApiError) {
        (self.on_failure)(error)
    }
}

impl<T, R, S, F> EntityListListener<T, R> for Callbacks<S, F>
where
    S: FnOnce(i32, String, Vec<T>, R) + Send + 'static,
    F: FnOnce(ApiError) + Send + 'static,
{
    fn result(self, code: i32, message: String, entities: Vec<T>, response: R) {
        (self.on_result)(code, message, entities, response)
    }

    fn failure(self, error: ApiError) {
        (self.on_failure)(error)
    }
}

impl<R, S, F> StringListener<R> for Callbacks<S, F>
where
    S: FnOnce(i32, String, String, R) + Send + 'static,
    F: FnOnce(ApiError) + Send + 'static,
{
    fn result(self, code: i32, message: String, data: String, response: R) {
        (self.on_result)(code, message, data, response)
    }

    fn failure(self, error: ApiError) {
        (self.on_failure)(error)
    }
}

impl<R, S, F> DefaultListener<R> for Callbacks<S, F>
where
    S: FnOnce(i32, String, R) + Send + 'static,
    F: FnOnce(ApiError) + Send + 'static,
{
    fn result(self, code: i32, message: String, response: R) {
        (self.on_result)(code, message, response)
    }

    fn failure(self, error: ApiError) {
        (self.on_failure)(error)
    }
}

/// A listener that ignores every outcome. Useful to name the type of a
/// `None` listener: `None::<Discard>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<R> RequestListener<R> for Discard {
    fn on_response(self, _response: R) {}

    fn on_failure(self, _error: ApiError) {}
}

impl<T, R> EntityListener<T, R> for Discard {
    fn result(self, _code: i32, _message: String, _entity: Option<T>, _response: R) {}

    fn failure(self, _error: ApiError) {}
}

impl<T, R> EntityListListener<T, R> for Discard {
    fn result(self, _code: i32, _message: String, _entities: Vec<T>, _response: R) {}

    fn failure(self, _error: ApiError) {}
}

impl<R> StringListener<R> for Discard {
    fn result(self, _code: i32, _message: String, _data: String, _response: R) {}

    fn failure(self, _error: ApiError) {}
}

impl<R> DefaultListener<R> for Discard {
    fn result(self, _code: i32, _message: String, _response: R) {}

    fn failure(self, _error: ApiError) {}
}
