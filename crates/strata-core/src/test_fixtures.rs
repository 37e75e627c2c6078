use crate::model::{
    field::{FieldKind, FieldModel, Scalar},
    record::{RecordKind, RecordModel},
};

const ORDER_LINE_REF: FieldKind = FieldKind::Record {
    path: "shop::OrderLine",
};

///
/// Order
///

pub(crate) struct Order;

impl RecordKind for Order {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::Order",
        name: "Order",
        fields: &[
            FieldModel::new("order_number", FieldKind::Scalar(Scalar::Text)),
            FieldModel::new("customer_id", FieldKind::Scalar(Scalar::Int32)),
            FieldModel::new("lines", FieldKind::List(&ORDER_LINE_REF)),
            FieldModel::new(
                "customer",
                FieldKind::Record {
                    path: "shop::Customer",
                },
            ),
            FieldModel::new("status", FieldKind::Enum { path: "shop::Status" }),
            FieldModel::new(
                "cancel_reason",
                FieldKind::Optional(&FieldKind::Enum {
                    path: "shop::CancelReason",
                }),
            ),
            FieldModel::new("total", FieldKind::Value { path: "shop::Money" }),
            FieldModel::new("tags", FieldKind::Set(&FieldKind::Scalar(Scalar::Text))),
            FieldModel::new("statuses", FieldKind::List(&FieldKind::Enum { path: "shop::Status" })),
            FieldModel::new("batches", FieldKind::List(&FieldKind::List(&ORDER_LINE_REF))),
            FieldModel::new(
                "billing",
                FieldKind::Optional(&FieldKind::Record {
                    path: "shop::Customer",
                }),
            ),
            FieldModel::new("line_set", FieldKind::Set(&ORDER_LINE_REF)),
            FieldModel::new(
                "draft_lines",
                FieldKind::Optional(&FieldKind::List(&ORDER_LINE_REF)),
            ),
            FieldModel::new(
                "sparse_lines",
                FieldKind::List(&FieldKind::Optional(&ORDER_LINE_REF)),
            ),
            FieldModel::new(
                "quantities",
                FieldKind::List(&FieldKind::Optional(&FieldKind::Scalar(Scalar::Uint32))),
            ),
        ],
    };
}

///
/// OrderLine
///

pub(crate) struct OrderLine;

impl RecordKind for OrderLine {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::OrderLine",
        name: "OrderLine",
        fields: &[
            FieldModel::new("sku", FieldKind::Scalar(Scalar::Text)),
            FieldModel::new("quantity", FieldKind::Scalar(Scalar::Uint32)),
            FieldModel::new(
                "order",
                FieldKind::Record {
                    path: "shop::Order",
                },
            ),
        ],
    };
}

///
/// Customer
///

pub(crate) struct Customer;

impl RecordKind for Customer {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::Customer",
        name: "Customer",
        fields: &[
            FieldModel::new("id", FieldKind::Scalar(Scalar::Ulid)),
            FieldModel::new("email", FieldKind::Scalar(Scalar::Text)),
        ],
    };
}

///
/// Ambiguous
/// declares the same field name twice
///

pub(crate) struct Ambiguous;

impl RecordKind for Ambiguous {
    const MODEL: &'static RecordModel = &RecordModel {
        path: "shop::Ambiguous",
        name: "Ambiguous",
        fields: &[
            FieldModel::new("dup", FieldKind::Scalar(Scalar::Int32)),
            FieldModel::new("other", FieldKind::Scalar(Scalar::Text)),
            FieldModel::new(
                "dup",
                FieldKind::Record {
                    path: "shop::Customer",
                },
            ),
        ],
    };
}
