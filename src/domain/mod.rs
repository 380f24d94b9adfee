// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Only order placement has real multi-step semantics; everything else in the
// service is a single parameterized statement handled directly in the HTTP
// layer. The order module owns:
// - Value objects (OrderRequest, OrderLineItem) and their validation
// - Errors (PlaceOrderError)
// - The placement transaction (OrderPlacement)
//
// ============================================================================

pub mod order;
