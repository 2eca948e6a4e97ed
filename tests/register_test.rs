use actor_framework::{ActorRef, ActorSystem, FrameworkError};
use coffeehouse::config::CoffeehouseConfig;
use coffeehouse::model::{Article, PriceList, PrintJob, Receipt, Transaction};
use coffeehouse::printer::{self, PrinterMessage};
use coffeehouse::register::{self, RegisterMessage};
use std::time::Duration;

const ASK_TIMEOUT: Duration = Duration::from_millis(50);
const WAIT: Duration = Duration::from_secs(1);

fn config(jam_probability: f64) -> CoffeehouseConfig {
    CoffeehouseConfig::default()
        .with_jam_probability(jam_probability)
        .with_ask_timeout(ASK_TIMEOUT)
        .with_seed(7)
        .validate()
        .unwrap()
}

async fn charge(
    register: &ActorRef<RegisterMessage>,
    article: Article,
    within: Duration,
) -> Result<Receipt, FrameworkError> {
    register
        .ask(
            |reply_to| RegisterMessage::Transaction {
                transaction: Transaction { article },
                reply_to,
            },
            within,
        )
        .await
}

async fn revenue(register: &ActorRef<RegisterMessage>) -> u64 {
    register
        .ask(|reply_to| RegisterMessage::Revenue { reply_to }, WAIT)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_revenue_counts_every_espresso_exactly_once() {
    let system = ActorSystem::new("test");
    let register = system.spawn("register", register::props(config(0.0)));

    for _ in 0..5 {
        let receipt = charge(&register, Article::Espresso, WAIT).await.unwrap();
        assert_eq!(receipt, Receipt { price: 150 });
    }
    let receipt = charge(&register, Article::Cappuccino, WAIT).await.unwrap();
    assert_eq!(receipt, Receipt { price: 250 });

    assert_eq!(revenue(&register).await, 150 * 5 + 250);
    system.shutdown().await;
}

#[tokio::test]
async fn test_jammed_printer_books_nothing() {
    let system = ActorSystem::new("test");
    let register = system.spawn("register", register::props(config(1.0)));

    let result = charge(&register, Article::Espresso, ASK_TIMEOUT * 4).await;
    assert!(matches!(result, Err(FrameworkError::AskTimeout(_))));

    assert_eq!(revenue(&register).await, 0);
    assert!(register.is_alive());
    system.shutdown().await;
}

#[tokio::test]
async fn test_revenue_matches_receipts_while_printer_jams_and_restarts() {
    let system = ActorSystem::new("test");
    let register = system.spawn("register", register::props(config(0.5)));

    let mut receipts = 0;
    for _ in 0..12 {
        // Outlast the register's own deadline so every outcome is final.
        if charge(&register, Article::Espresso, ASK_TIMEOUT * 4).await.is_ok() {
            receipts += 1;
        }
    }

    assert_eq!(revenue(&register).await, 150 * receipts);
    system.shutdown().await;
}

#[tokio::test]
async fn test_register_restart_keeps_revenue() {
    let system = ActorSystem::new("test");
    let prices = PriceList::empty().with_price(Article::Espresso, 150);
    let register = system.spawn("register", register::props(config(0.0).with_prices(prices)));

    charge(&register, Article::Espresso, WAIT).await.unwrap();
    charge(&register, Article::Espresso, WAIT).await.unwrap();
    assert_eq!(revenue(&register).await, 300);

    // An unpriced article fails the register; the supervisor restarts it.
    let result = charge(&register, Article::Cappuccino, ASK_TIMEOUT).await;
    assert_eq!(result, Err(FrameworkError::AskTimeout(ASK_TIMEOUT)));
    assert_eq!(revenue(&register).await, 300);

    // The restarted register has a working printer again.
    charge(&register, Article::Espresso, WAIT).await.unwrap();
    assert_eq!(revenue(&register).await, 450);
    system.shutdown().await;
}

#[tokio::test]
async fn test_printer_survives_its_own_jams() {
    let system = ActorSystem::new("test");
    let printer = system.spawn("printer", printer::props(1.0, Some(1)));

    for _ in 0..3 {
        let result = printer
            .ask(
                |reply_to| PrinterMessage::Print {
                    job: PrintJob { price: 150 },
                    reply_to,
                },
                ASK_TIMEOUT,
            )
            .await;
        assert_eq!(result, Err(FrameworkError::AskTimeout(ASK_TIMEOUT)));
    }

    assert!(printer.is_alive());
    system.shutdown().await;
}
