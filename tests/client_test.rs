//! HTTP client tests against a mock EDI backend.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vendor_edi_portal::dto::{build_amendment_payload, build_asn_payload};
use vendor_edi_portal::models::invoice::InvoiceInput;
use vendor_edi_portal::models::purchase_order::{
    Address, FinancialDetails, PoLineItem, PoStatus, PurchaseOrderDetails,
};
use vendor_edi_portal::services::reconciliation::initialize_quantities;
use vendor_edi_portal::{HttpPortalClient, PortalError, VendorPortalApi};

fn client_for(server: &MockServer) -> HttpPortalClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    HttpPortalClient::with_client(base_url, reqwest::Client::new())
}

fn po_details_json() -> serde_json::Value {
    json!({
        "code": "PO-1001",
        "status": "RELEASED",
        "vendorCode": "V-77",
        "vendorName": "Acme Foods",
        "toStoreCode": "ST-9",
        "toStoreName": "Central Store",
        "timestamp": "2025-03-01",
        "expiryDate": "2025-04-01",
        "deliveryDate": "2025-03-10",
        "totalQty": 10,
        "cityId": "BLR",
        "address": {
            "storeAddress": "1 Market Rd",
            "vendorAddress": "2 Supply Ln",
            "vendorPinCode": "560001",
            "storeBillingAddress": "1 Market Rd",
            "storeShippingAddress": "1 Market Rd",
        },
        "financialDetails": {
            "entityPAN": "AAAAA0000A",
            "vendorPAN": "BBBBB1111B",
            "entityGSTIN": "29AAAAA0000A1Z5",
            "vendorGSTIN": "29BBBBB1111B1Z5",
        },
        "poLineItems": [{
            "skuCode": "A1",
            "materialCode": "MAT-A1",
            "productName": "Basmati Rice 5kg",
            "ean": "8901234567890",
            "quantity": 10,
            "costPrice": 5,
            "mrp": 8,
            "totalAmount": 50,
        }],
    })
}

fn sample_details() -> PurchaseOrderDetails {
    PurchaseOrderDetails {
        code: "PO-1001".to_string(),
        status: PoStatus::Released,
        vendor_code: "V-77".to_string(),
        vendor_name: "Acme Foods".to_string(),
        to_store_code: "ST-9".to_string(),
        to_store_name: "Central Store".to_string(),
        timestamp: "2025-03-01".to_string(),
        expiry_date: "2025-04-01".to_string(),
        delivery_date: "2025-03-10".to_string(),
        total_qty: 10,
        city_id: "BLR".to_string(),
        address: Address {
            store_address: "1 Market Rd".to_string(),
            vendor_address: "2 Supply Ln".to_string(),
            vendor_pin_code: "560001".to_string(),
            store_billing_address: "1 Market Rd".to_string(),
            store_shipping_address: "1 Market Rd".to_string(),
        },
        financial_details: FinancialDetails {
            entity_pan: "AAAAA0000A".to_string(),
            vendor_pan: "BBBBB1111B".to_string(),
            entity_gstin: "29AAAAA0000A1Z5".to_string(),
            vendor_gstin: "29BBBBB1111B1Z5".to_string(),
        },
        po_line_items: vec![PoLineItem {
            sku_code: "A1".to_string(),
            material_code: "MAT-A1".to_string(),
            product_name: "Basmati Rice 5kg".to_string(),
            ean: Some("8901234567890".to_string()),
            quantity: 10,
            cost_price: Some(dec!(5)),
            mrp: dec!(8),
            total_amount: dec!(50),
        }],
    }
}

#[tokio::test]
async fn lists_purchase_orders_with_window_and_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/po"))
        .and(query_param("days", "7"))
        .and(query_param("page_number", "2"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "purchaseOrders": [{
                    "code": "PO-1001",
                    "status": "LOCKED",
                    "vendorCode": "V-77",
                    "vendorName": "Acme Foods",
                    "toStoreCode": "ST-9",
                    "toStoreName": "Central Store",
                    "timestamp": "2025-03-01",
                    "expiryDate": "2025-04-01",
                    "deliveryDate": "2025-03-10",
                    "totalQty": 10,
                    "cityId": "BLR",
                }],
                "hasNext": true,
                "pageNumber": 2,
                "pageSize": 10,
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.list_purchase_orders(2, 10, 7).await.unwrap();

    assert_eq!(page.purchase_orders.len(), 1);
    assert_eq!(page.purchase_orders[0].code, "PO-1001");
    assert_eq!(page.purchase_orders[0].status, PoStatus::Locked);
    assert!(page.has_next);
    assert_eq!(page.page_number, 2);
}

#[tokio::test]
async fn fetches_po_details_and_unwraps_the_first_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/po/details"))
        .and(query_param("poCodes", "PO-1001"))
        .and(query_param("includeLineItemDetails", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "purchaseOrders": [po_details_json()] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let details = client
        .get_purchase_order_details("PO-1001")
        .await
        .unwrap()
        .expect("details should be present");

    assert_eq!(details.code, "PO-1001");
    assert_eq!(details.po_line_items.len(), 1);
    assert_eq!(details.po_line_items[0].sku_code, "A1");
    assert_eq!(details.po_line_items[0].cost_price, Some(dec!(5)));
}

#[tokio::test]
async fn missing_po_details_yield_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/po/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "purchaseOrders": [] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let details = client.get_purchase_order_details("PO-9999").await.unwrap();
    assert!(details.is_none());
}

#[tokio::test]
async fn creates_an_asn_from_a_built_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/asn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let po = sample_details();
    let invoice = InvoiceInput {
        invoice_number: "INV-42".to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        taxable_amount: dec!(45),
        grand_total_amount: dec!(50),
        shipping_date: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
        delivery_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
    };
    let quantities = initialize_quantities(&po);
    let payload = build_asn_payload(&po, &invoice, &quantities);

    let client = client_for(&server);
    client.create_asn(&payload).await.unwrap();
}

#[tokio::test]
async fn backend_rejection_surfaces_as_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/asn"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let po = sample_details();
    let invoice = InvoiceInput {
        invoice_number: "INV-42".to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        taxable_amount: dec!(45),
        grand_total_amount: dec!(50),
        shipping_date: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
        delivery_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
    };
    let payload = build_asn_payload(&po, &invoice, &initialize_quantities(&po));

    let client = client_for(&server);
    let err = client.create_asn(&payload).await.unwrap_err();
    assert!(matches!(err, PortalError::Api { status: 500 }));
}

#[tokio::test]
async fn lists_asns_and_tolerates_a_null_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asn"))
        .and(query_param("po_number", "PO-1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ASNs": [{
                    "asnNumber": "ASN-7",
                    "invoiceNumber": "INV-42",
                    "status": "CREATED",
                    "asnQuantity": 10,
                    "asnTotalAmount": 50,
                }]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/asn"))
        .and(query_param("po_number", "PO-2002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let asns = client.list_asns_for_po("PO-1001").await.unwrap();
    assert_eq!(asns.len(), 1);
    assert_eq!(asns[0].asn_number, "ASN-7");
    assert!(asns[0].is_cancellable());

    let empty = client.list_asns_for_po("PO-2002").await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn cancels_an_asn_by_number() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/asn"))
        .and(body_json(json!({ "asnNumber": "ASN-7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.cancel_asn("ASN-7").await.unwrap();
}

#[tokio::test]
async fn submits_an_amendment_to_the_po_scoped_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/po/PO-1001/amendment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = build_amendment_payload("PO-1001", Vec::new());
    client.amend_purchase_order("PO-1001", &payload).await.unwrap();
}
