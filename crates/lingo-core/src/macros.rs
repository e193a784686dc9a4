//! Convenience macros for building parameter maps and string packs.

/// Builds a [`Params`](crate::Params) map.
///
/// Values go through [`ParamValue::from`](crate::ParamValue), so string
/// and numeric literals work directly; functions and opaque content are
/// passed as explicit [`ParamValue`](crate::ParamValue)s.
///
/// # Examples
///
/// ```rust
/// use lingo_core::{params, Params};
///
/// let params: Params = params! {
///     "name" => "Patrick",
///     "age" => 30,
/// };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Params::new();
        $(
            map.insert(($name).to_string(), $crate::ParamValue::from($value));
        )+
        map
    }};
}

/// Builds a [`StringPack`](crate::StringPack).
///
/// # Examples
///
/// ```rust
/// use lingo_core::pack;
///
/// let en = pack! {
///     "greeting" => "Hello {name}",
///     "farewell" => "Goodbye",
/// };
/// assert_eq!(en.get("farewell"), Some("Goodbye"));
/// ```
#[macro_export]
macro_rules! pack {
    ($($key:expr => $template:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut pack = $crate::StringPack::new();
        $(
            pack.insert($key, $template);
        )*
        pack
    }};
}
