//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use helpdesk_app::{
    chat::MockChatService,
    context::AppContext,
    domain::{
        customers::{MockCustomersService, records::CustomerRecord},
        tickets::{
            MockTicketsService,
            records::{NEW_TICKET_STATUS, TicketRecord},
        },
    },
};

use crate::state::State;

fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_list_customers().never();
    customers.expect_get_customer().never();
    customers.expect_create_customer().never();
    customers.expect_update_customer().never();
    customers.expect_approve_customer().never();
    customers.expect_delete_customer().never();

    customers
}

fn strict_tickets_mock() -> MockTicketsService {
    let mut tickets = MockTicketsService::new();

    tickets.expect_create_ticket().never();
    tickets.expect_get_ticket().never();
    tickets.expect_list_tickets().never();
    tickets.expect_update_ticket().never();

    tickets
}

fn strict_chat_mock() -> MockChatService {
    let mut chat = MockChatService::new();

    chat.expect_complete().never();

    chat
}

pub(crate) fn state_with_customers(customers: MockCustomersService) -> Arc<State> {
    State::from_app_context(AppContext {
        customers: Arc::new(customers),
        tickets: Arc::new(strict_tickets_mock()),
        chat: Arc::new(strict_chat_mock()),
    })
}

pub(crate) fn state_with_tickets(tickets: MockTicketsService) -> Arc<State> {
    State::from_app_context(AppContext {
        customers: Arc::new(strict_customers_mock()),
        tickets: Arc::new(tickets),
        chat: Arc::new(strict_chat_mock()),
    })
}

pub(crate) fn state_with_chat(chat: MockChatService) -> Arc<State> {
    State::from_app_context(AppContext {
        customers: Arc::new(strict_customers_mock()),
        tickets: Arc::new(strict_tickets_mock()),
        chat: Arc::new(chat),
    })
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_customers(customers)))
            .push(route),
    )
}

pub(crate) fn tickets_service(tickets: MockTicketsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_tickets(tickets)))
            .push(route),
    )
}

pub(crate) fn chat_service(chat: MockChatService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_chat(chat)))
            .push(route),
    )
}

pub(crate) fn make_customer(uuid: Uuid) -> CustomerRecord {
    CustomerRecord {
        uuid,
        name: "Alice Andersen".to_string(),
        email: "alice@example.com".to_string(),
        address: "Main Street 1".to_string(),
        postal_code: "7200".to_string(),
        city: "Grindsted".to_string(),
        cvr: None,
        is_approved: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_ticket(uuid: Uuid, customer_uuid: Uuid) -> TicketRecord {
    TicketRecord {
        uuid,
        customer_uuid,
        title: "Printer offline".to_string(),
        description: "The office printer does not respond to jobs.".to_string(),
        status: NEW_TICKET_STATUS.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        consent_given_at: Timestamp::UNIX_EPOCH,
    }
}
