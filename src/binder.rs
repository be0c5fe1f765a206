//! Binder Module
//!
//! The public binding operations.
//!
//! ## Operations
//! - [`scan`]: bind the first N reply values to N destinations, in order
//! - [`Binder::scan_struct`]: bind alternating name/value pairs to struct fields
//! - [`Binder::append_struct`]: flatten a struct into name/value arguments
//! - [`Binder::flatten_struct`]: same, panicking on failure
//!
//! Every failure aborts the operation immediately. Fields already populated
//! before the failure keep their new values.

use std::sync::Arc;

use crate::cache::SpecCache;
use crate::config::Config;
use crate::convert::{convert, Scan};
use crate::error::{Result, ScanError};
use crate::record::{resolve_mut, resolve_ref, Record};
use crate::spec::StructSpec;
use crate::value::{Arg, Value};

/// Bind the leading values of a reply to destinations, in order
///
/// Returns the values following the consumed ones, so a long flat reply can
/// be scanned one record at a time.
pub fn scan<'v>(values: &'v [Value], dests: &mut [&mut dyn Scan]) -> Result<&'v [Value]> {
    if values.len() < dests.len() {
        return Err(ScanError::ShortSequence {
            have: values.len(),
            need: dests.len(),
        });
    }

    for (dest, value) in dests.iter_mut().zip(values) {
        convert(dest.slot(), value)?;
    }

    Ok(&values[dests.len()..])
}

/// Positional scan with destinations listed inline
///
/// ```
/// use replyscan::{scan, Value};
///
/// let reply = vec![Value::from("3"), Value::from("7")];
/// let (mut a, mut b) = (0i64, 0u8);
/// let rest = scan!(&reply, a, b).unwrap();
/// assert_eq!((a, b), (3, 7));
/// assert!(rest.is_empty());
/// ```
#[macro_export]
macro_rules! scan {
    ($values:expr $(, $dest:expr)* $(,)?) => {
        $crate::scan($values, &mut [$( &mut $dest as &mut dyn $crate::Scan ),*])
    };
}

/// Binds replies to structs, through a spec cache it owns
///
/// Create one per application (or per test) and share it; lookups after the
/// first use of a type only take a read lock.
pub struct Binder {
    cache: SpecCache,
}

impl Binder {
    /// Create a binder with a fresh spec cache
    pub fn new(config: Config) -> Self {
        Self {
            cache: SpecCache::new(config),
        }
    }

    /// Get the underlying spec cache
    pub fn cache(&self) -> &SpecCache {
        &self.cache
    }

    /// Get the compiled spec for `T`
    pub fn spec<T: Record>(&self) -> Result<Arc<StructSpec>> {
        self.cache.get_or_compile::<T>()
    }

    /// Bind alternating name/value pairs to the fields of `dest`
    ///
    /// Names without a matching field are skipped. Fields without a matching
    /// name keep their current values.
    pub fn scan_struct<T: Record>(&self, values: &[Value], dest: &mut T) -> Result<()> {
        let spec = self.spec::<T>()?;

        if values.len() % 2 != 0 {
            return Err(ScanError::OddLength(values.len()));
        }

        for pair in values.chunks_exact(2) {
            let Some(name) = pair[0].as_bulk() else {
                return Err(ScanError::InvalidKeyType(pair[0].kind_name()));
            };

            let Some(field) = spec.field_spec(name) else {
                tracing::trace!(
                    "Skipping unknown field {:?} for {}",
                    String::from_utf8_lossy(name),
                    T::layout().type_name
                );
                continue;
            };

            let target = resolve_mut(&mut *dest, &field.index)?;
            convert(target.slot(), &pair[1])?;
        }

        Ok(())
    }

    /// Append `name, value` for every bindable field of `src` to `args`
    pub fn append_struct<T: Record>(&self, mut args: Vec<Arg>, src: &T) -> Result<Vec<Arg>> {
        let spec = self.spec::<T>()?;

        args.reserve(spec.len() * 2);
        for field in spec.fields() {
            let value = resolve_ref(src, &field.index)?;
            args.push(Arg::Str(field.name.clone()));
            args.push(value.to_arg());
        }

        Ok(args)
    }

    /// Same as [`append_struct`](Self::append_struct), for callers that treat
    /// a malformed struct as a programming error
    ///
    /// # Panics
    /// Panics if `append_struct` fails.
    pub fn flatten_struct<T: Record>(&self, args: Vec<Arg>, src: &T) -> Vec<Arg> {
        match self.append_struct(args, src) {
            Ok(args) => args,
            Err(e) => panic!("flatten_struct failed for {}: {}", T::layout().type_name, e),
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
