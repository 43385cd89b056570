/// Builds [`CallArguments`](crate::CallArguments) from positional values and
/// `name = value` keyword pairs.
///
/// ```
/// use multiton::call_args;
///
/// let args = call_args![1, "test"; foo = "bar"];
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.keyword().len(), 1);
/// ```
#[macro_export]
macro_rules! call_args {
    () => {
        $crate::CallArguments::new()
    };
    (; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::CallArguments::new()$(.with_keyword(stringify!($name), $value))+
    };
    ($($positional:expr),+ $(,)?) => {
        $crate::CallArguments::new()$(.with_positional($positional))+
    };
    ($($positional:expr),+ ; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::CallArguments::new()$(.with_positional($positional))+$(.with_keyword(stringify!($name), $value))+
    };
}
