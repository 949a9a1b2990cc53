/// Generate a router async method that walks connectors in registration order and
/// calls a single-provider method. Not-found and fallback handling live in
/// `Dalal::fetch_single`.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "snapshot", "news", "earnings").
/// - The orchestrator formats the final error as "{label} for {SYMBOL}".
#[macro_export]
macro_rules! dalal_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $sym_ident:ident : $sym_ty:ty $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident( $call_first:ident $(, $call_rest:ident )* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "dalal::router",
                skip(self, $sym_ident $(, $arg_ident)*),
                fields(symbol = %$sym_ident),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no connector succeeds or none support the capability.
        pub async fn $name(
            &self,
            $sym_ident: $sym_ty,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, dalal_core::DalalError> {
            self.fetch_single(
                $sym_ident,
                $capability,
                $not_found,
                move |c, s| {
                    c.$accessor()?;
                    $( let $arg_ident = $arg_ident.clone(); )*
                    Some(async move {
                        match c.$accessor() {
                            Some(p) => p.$call_name(&s $(, $call_rest )*).await,
                            None => Err(dalal_core::DalalError::connector(
                                c.name(),
                                format!("missing {} capability during call", $capability),
                            )),
                        }
                    })
                },
            )
            .await
        }
    };
}
