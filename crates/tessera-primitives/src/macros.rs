#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Ascii,
                cql_name = "ascii",
                supports_conditions = true
            ),
            (
                Bigint,
                cql_name = "bigint",
                supports_conditions = true
            ),
            (
                Blob,
                cql_name = "blob",
                supports_conditions = true
            ),
            (
                Boolean,
                cql_name = "boolean",
                supports_conditions = true
            ),
            (
                Counter,
                cql_name = "counter",
                supports_conditions = false
            ),
            (
                Decimal,
                cql_name = "decimal",
                supports_conditions = true
            ),
            (
                Double,
                cql_name = "double",
                supports_conditions = true
            ),
            (
                Float,
                cql_name = "float",
                supports_conditions = true
            ),
            (
                Inet,
                cql_name = "inet",
                supports_conditions = true
            ),
            (
                Int,
                cql_name = "int",
                supports_conditions = true
            ),
            (
                Text,
                cql_name = "text",
                supports_conditions = true
            ),
            (
                Timestamp,
                cql_name = "timestamp",
                supports_conditions = true
            ),
            (
                Timeuuid,
                cql_name = "timeuuid",
                supports_conditions = true
            ),
            (
                Uuid,
                cql_name = "uuid",
                supports_conditions = true
            ),
            (
                Varint,
                cql_name = "varint",
                supports_conditions = true
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, cql_name = $cql_name:expr, supports_conditions = $supports_conditions:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    cql_name: $cql_name,
                    supports_conditions: $supports_conditions,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, cql_name = $cql_name:expr, supports_conditions = $supports_conditions:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
    ( @args $($ignore:tt)*; @entries $( ($scalar:ident, cql_name = $cql_name:expr, supports_conditions = $supports_conditions:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
