use super::*;

#[test]
fn stepper_marks_earlier_steps_done() {
    let steps = stepper(SalesOrderStatus::Picking).unwrap();
    let states: Vec<StepState> = steps.iter().map(|(_, s)| *s).collect();
    assert_eq!(
        states,
        vec![StepState::Done, StepState::Done, StepState::Current, StepState::Pending, StepState::Pending]
    );
    assert_eq!(steps[0].0, SalesOrderStatus::Created);
}

#[test]
fn delivered_orders_complete_the_stepper() {
    let steps = stepper(SalesOrderStatus::Delivered).unwrap();
    assert_eq!(steps.last().map(|(_, s)| *s), Some(StepState::Current));
    assert!(steps[..4].iter().all(|(_, s)| *s == StepState::Done));
}

#[test]
fn cancelled_orders_have_no_stepper() {
    assert!(stepper(SalesOrderStatus::Cancelled).is_none());
}

#[test]
fn subtotal_falls_back_to_quantity_times_price() {
    let mut item = SalesOrderItem {
        id: None,
        product_id: 1,
        product_sku: None,
        product_name: None,
        quantity: 3,
        unit_price: 2.0,
        total_price: None,
        notes: None,
    };
    assert_eq!(item_subtotal(&item), 6.0);
    item.total_price = Some(5.5);
    assert_eq!(item_subtotal(&item), 5.5);
}
