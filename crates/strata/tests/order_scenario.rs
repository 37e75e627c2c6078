use strata::{
    BuilderConfig, ConfigError, DeclarationKind, EntryKind, ErrorKind, ModelBuilder,
    core::model::record::SourceType, export_json, prelude::*,
};

const ORDER_LINE: FieldKind = FieldKind::Record {
    path: "shop::OrderLine",
};

struct Order;

impl RecordKind for Order {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::Order",
        name: "Order",
        fields: &[
            FieldModel::new("order_number", FieldKind::Scalar(Scalar::Text)),
            FieldModel::new("customer_id", FieldKind::Scalar(Scalar::Int32)),
            FieldModel::new("lines", FieldKind::List(&ORDER_LINE)),
        ],
    };
}

struct OrderLine;

impl RecordKind for OrderLine {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::OrderLine",
        name: "OrderLine",
        fields: &[
            FieldModel::new("sku", FieldKind::Scalar(Scalar::Text)),
            FieldModel::new("order", FieldKind::Record { path: "shop::Order" }),
            FieldModel::new("product", FieldKind::Record { path: "shop::Product" }),
        ],
    };
}

fn builder() -> ModelBuilder {
    ModelBuilder::with_config(BuilderConfig::default().with_tracing(false))
}

#[test]
fn order_end_to_end() {
    let mut builder = builder();

    builder.mark_unique::<Order, _>("order_number").unwrap();
    {
        let registry = builder.registry();
        let sets: Vec<_> = registry
            .unique_constraints()
            .map(|props| (props.source.name(), props.field_names()))
            .collect();
        assert_eq!(sets, vec![("Order", vec!["order_number"])]);
    }

    builder.mark_state_definer::<Order, _>("lines").unwrap();
    assert_eq!(
        builder
            .registry()
            .state_definer_for(SourceType::of::<Order>())
            .map(|props| props.field_names()),
        Some(vec!["lines"])
    );

    let err = builder.mark_unique::<Order, _>("lines").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidFieldKind {
            record: "shop::Order",
            field: "lines",
            declaration: DeclarationKind::Unique,
            ..
        }
    ));

    let registry = builder.finish();
    let kinds: Vec<_> = registry.export().iter().map(|entry| entry.kind).collect();
    assert_eq!(kinds, vec![EntryKind::Unique, EntryKind::StateDefiner]);
}

#[test]
fn unique_sets_are_order_independent() {
    let mut builder = builder();

    builder
        .mark_unique::<Order, _>(["order_number", "customer_id"])
        .unwrap();
    let err = builder
        .mark_unique::<Order, _>(["customer_id", "order_number"])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateConstraint);
    assert_eq!(builder.registry().unique_constraints().count(), 1);
}

#[test]
fn subset_and_superset_are_distinct_sets() {
    let mut builder = builder();

    builder.mark_unique::<Order, _>("order_number").unwrap();
    builder
        .mark_unique::<Order, _>(["order_number", "customer_id"])
        .unwrap();

    assert_eq!(
        builder
            .registry()
            .unique_constraints_for(SourceType::of::<Order>())
            .count(),
        2
    );
}

#[test]
fn state_definer_overlap_is_all_or_nothing() {
    let mut builder = builder();

    builder.mark_state_definer::<OrderLine, _>("order").unwrap();
    let err = builder
        .mark_state_definer::<OrderLine, _>(["product", "order"])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateConstraint);
    assert!(err.to_string().ends_with("(order)"), "{err}");
    assert_eq!(
        builder
            .registry()
            .state_definer_for(SourceType::of::<OrderLine>())
            .map(|props| props.field_names()),
        Some(vec!["order"]),
        "product must not be appended"
    );

    builder.mark_state_definer::<OrderLine, _>("product").unwrap();
    assert_eq!(
        builder
            .registry()
            .state_definer_for(SourceType::of::<OrderLine>())
            .map(|props| props.field_names()),
        Some(vec!["order", "product"])
    );
}

#[test]
fn json_export_shape() {
    let mut builder = builder();
    builder
        .entity::<Order>()
        .mark_unique("order_number")
        .and_then(|order| order.mark_state_definer("lines"))
        .unwrap();
    builder.mark_state_definer::<OrderLine, _>("order").unwrap();

    let json = export_json(builder.registry()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "typeName": "Order", "kind": "unique", "fieldNames": ["order_number"] },
            { "typeName": "Order", "kind": "stateDefiner", "fieldNames": ["lines"] },
            { "typeName": "OrderLine", "kind": "stateDefiner", "fieldNames": ["order"] },
        ])
    );
}
