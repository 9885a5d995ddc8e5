/// Generate accessors for fields of [`crate::global_state::Globals`].
///
/// Usage:
/// `global_signals! {
///     pub toasts => toasts: Vec<ToastEntry>,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $(#[$meta:meta])* $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
