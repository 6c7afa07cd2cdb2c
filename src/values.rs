use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// A source of placeholder values.
///
/// Returning `None` leaves the placeholder in the output untouched.
pub trait Values {
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<T> Values for &T
where
    T: Values + ?Sized,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        T::get_value(self, key)
    }
}

impl<K, V> Values for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter().find_map(|(k, v)| {
            if k.as_ref() == key {
                Some(Cow::Borrowed(v.as_ref()))
            } else {
                None
            }
        })
    }
}

impl<K, V, const N: usize> Values for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().get_value(key)
    }
}

impl<K, V> Values for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().get_value(key)
    }
}

impl<K, V, S> Values for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Values for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// Values backed by a function.
///
/// Construct with [`vals`].
#[derive(Copy, Clone, Debug)]
pub struct ValuesFn<F> {
    inner: F,
}

impl<F> Values for ValuesFn<F>
where
    F: Fn(&str) -> Option<Cow<'static, str>>,
{
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.inner)(key)
    }
}

/// Use a function as a source of values.
///
/// ```
/// use std::borrow::Cow;
/// use stencil::{vals, Delimiters, Scanner};
///
/// let delimiters = Delimiters::default();
/// let values = vals(|key| (key == "n").then(|| Cow::Borrowed("one")));
/// assert_eq!(Scanner::new(&delimiters).render("${n} ${m}", &values), "one ${m}");
/// ```
pub const fn vals<F>(func: F) -> ValuesFn<F>
where
    F: Fn(&str) -> Option<Cow<'static, str>>,
{
    ValuesFn { inner: func }
}
