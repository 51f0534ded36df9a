/// Generate `use_*` accessors for fields of the provided [`AppContext`](crate::context::AppContext).
///
/// Usage:
/// `context_accessors! {
///     pub use_analytics => analytics: AnalyticsStore,
///     pub use_theme => theme: ThemeStore,
/// }`
#[macro_export]
macro_rules! context_accessors {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> $ty {
                $crate::context::use_app_context().$field
            }
        )+
    };
}
