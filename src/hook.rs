//! Call-interception combinators.
//!
//! Given an original callable and a hook, each combinator produces a
//! replacement callable with the same calling convention. This is the leaf
//! utility the whole crate is built from, exposed so extension authors can
//! wrap host callables the same way. The combinators hold no state of their
//! own and never swallow panics from either side.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

/// A boxed callable with one argument bundle and one return value.
pub type Call<A, R> = Box<dyn FnMut(A) -> R>;

/// Run `hook` before the original with the same arguments. The return value
/// is always the original's.
#[must_use]
pub fn before<A, R>(mut original: Call<A, R>, mut hook: impl FnMut(&A) + 'static) -> Call<A, R>
where
    A: 'static,
    R: 'static,
{
    Box::new(move |args| {
        hook(&args);
        original(args)
    })
}

/// Run `hook` after the original with the same arguments. The return value
/// is always the original's.
#[must_use]
pub fn after<A, R>(mut original: Call<A, R>, mut hook: impl FnMut(&A) + 'static) -> Call<A, R>
where
    A: Clone + 'static,
    R: 'static,
{
    Box::new(move |args| {
        let ret = original(args.clone());
        hook(&args);
        ret
    })
}

/// Replace the original entirely: the hook's return value is used and the
/// original is never invoked again.
#[must_use]
pub fn replace<A, R>(original: Call<A, R>, hook: impl FnMut(A) -> R + 'static) -> Call<A, R>
where
    A: 'static,
    R: 'static,
{
    drop(original);
    Box::new(hook)
}

/// Like [`replace`], but the hook receives the original callable as its
/// first argument so it may conditionally delegate.
#[must_use]
pub fn replace_delegating<A, R>(
    original: Call<A, R>,
    mut hook: impl FnMut(&mut Call<A, R>, A) -> R + 'static,
) -> Call<A, R>
where
    A: 'static,
    R: 'static,
{
    let mut original = original;
    Box::new(move |args| hook(&mut original, args))
}
