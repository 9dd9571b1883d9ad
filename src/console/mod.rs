//! Menu-driven terminal front end for the inventory service.

mod render;

use std::collections::VecDeque;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument, warn};

use crate::clients::InventoryClient;
use crate::error::ConsoleError;

pub use render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListProducts,
    ShowProduct,
    RecordPurchase,
    ShipProduct,
    BalanceStock,
    ProfitLoss,
    PurchaseReport,
}

impl FromStr for MenuChoice {
    type Err = ConsoleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.parse::<i64>() {
            Ok(0) => Ok(MenuChoice::Exit),
            Ok(1) => Ok(MenuChoice::ListProducts),
            Ok(2) => Ok(MenuChoice::ShowProduct),
            Ok(3) => Ok(MenuChoice::RecordPurchase),
            Ok(4) => Ok(MenuChoice::ShipProduct),
            Ok(5) => Ok(MenuChoice::BalanceStock),
            Ok(6) => Ok(MenuChoice::ProfitLoss),
            Ok(7) => Ok(MenuChoice::PurchaseReport),
            _ => Err(ConsoleError::InvalidSelection(token.to_string())),
        }
    }
}

/// Splits input into whitespace-delimited tokens, reading more lines only
/// when the buffered ones run out.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `None` once input is exhausted.
    pub async fn next_token(&mut self) -> Result<Option<String>, ConsoleError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Interactive loop: show the menu, read a choice, run it, repeat.
pub struct Console<R, W> {
    client: InventoryClient,
    input: TokenReader<R>,
    output: W,
    renderer: Renderer,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: InventoryClient, reader: R, writer: W, currency: impl Into<String>) -> Self {
        Self {
            client,
            input: TokenReader::new(reader),
            output: writer,
            renderer: Renderer::new(currency),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user picks Exit or input ends. Only I/O failures and a
    /// lost inventory service end the loop with an error.
    #[instrument(name = "console", skip(self))]
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            let mut screen = String::new();
            self.renderer.menu(&mut screen)?;
            self.emit(&screen).await?;

            let outcome = match self.input.next_token().await? {
                None => Err(ConsoleError::EndOfInput),
                Some(token) => {
                    self.emit("\n").await?;
                    match token.parse::<MenuChoice>() {
                        Ok(MenuChoice::Exit) => break,
                        Ok(choice) => self.dispatch(choice).await,
                        Err(e) => Err(e),
                    }
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ConsoleError::EndOfInput) => {
                    debug!("Input closed");
                    self.emit("\n").await?;
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Operation failed");
                    let mut message = String::new();
                    self.renderer.error(&mut message, &e)?;
                    self.emit(&message).await?;
                }
                Err(e) => return Err(e),
            }
            self.emit("\n").await?;
        }

        let mut farewell = String::new();
        self.renderer.goodbye(&mut farewell)?;
        self.emit(&farewell).await
    }

    #[instrument(skip(self))]
    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ConsoleError> {
        let mut screen = String::new();
        match choice {
            MenuChoice::ListProducts => {
                let products = self.client.list_products().await?;
                self.renderer.product_table(&mut screen, &products)?;
            }
            MenuChoice::ShowProduct => {
                let id = self.prompt_number("Enter Product ID: ").await?;
                let product = self.client.get_product(id).await?;
                self.renderer.product_detail(&mut screen, &product)?;
            }
            MenuChoice::RecordPurchase => {
                let id = self.prompt_number("Enter Product ID: ").await?;
                let quantity = self.prompt_number("Enter Quantity Purchased: ").await?;
                let record = self.client.record_purchase(id, quantity).await?;
                self.renderer.purchase_receipt(&mut screen, &record)?;
            }
            MenuChoice::ShipProduct => {
                let id = self.prompt_number("Enter Product ID to Ship: ").await?;
                let quantity = self.prompt_number("Enter Quantity: ").await?;
                let product = self.client.ship_product(id, quantity).await?;
                self.renderer.shipment(&mut screen, &product, quantity)?;
            }
            MenuChoice::BalanceStock => {
                let lines = self.client.stock_balance().await?;
                self.renderer.stock_balance(&mut screen, &lines)?;
            }
            MenuChoice::ProfitLoss => {
                let report = self.client.profit_loss().await?;
                self.renderer.profit_loss(&mut screen, &report)?;
            }
            MenuChoice::PurchaseReport => {
                let records = self.client.purchase_history().await?;
                self.renderer.purchase_history(&mut screen, &records)?;
            }
            MenuChoice::Exit => {}
        }
        self.emit(&screen).await
    }

    async fn prompt_number(&mut self, prompt: &str) -> Result<u32, ConsoleError> {
        self.emit(prompt).await?;
        let token = self.input.next_token().await?.ok_or(ConsoleError::EndOfInput)?;
        token
            .parse::<u32>()
            .map_err(|_| ConsoleError::InvalidNumber(token))
    }

    async fn emit(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, PurchaseRecord};
    use crate::error::InventoryError;
    use crate::mock_framework::{create_mock_client, expect_request};
    use crate::messages::InventoryRequest;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!("7".parse::<MenuChoice>().unwrap(), MenuChoice::PurchaseReport);
        assert!(matches!("8".parse::<MenuChoice>(), Err(ConsoleError::InvalidSelection(_))));
        assert!(matches!("-1".parse::<MenuChoice>(), Err(ConsoleError::InvalidSelection(_))));
        assert!(matches!("list".parse::<MenuChoice>(), Err(ConsoleError::InvalidSelection(_))));
    }

    #[tokio::test]
    async fn test_token_reader_spans_lines() {
        let input: &[u8] = b"3 2\n\n   5\n";
        let mut reader = TokenReader::new(input);
        assert_eq!(reader.next_token().await.unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().await.unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_token().await.unwrap().as_deref(), Some("5"));
        assert_eq!(reader.next_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_purchase_prompts_and_forwards_request() {
        let (client, mut receiver) = create_mock_client(10);

        let console_task = tokio::spawn(async move {
            let input: &[u8] = b"3\n2 3\n0\n";
            let mut console = Console::new(client, input, Vec::new(), "₹");
            console.run().await.map(|_| console.into_output())
        });

        match expect_request(&mut receiver).await {
            Some(InventoryRequest::RecordPurchase { id, quantity, respond_to }) => {
                assert_eq!((id, quantity), (2, 3));
                respond_to
                    .send(Ok(PurchaseRecord {
                        product_name: "Monitor".into(),
                        quantity: 3,
                        total_cost: 21000.0,
                        timestamp: "Fri Oct 16 09:30:00 2026".into(),
                    }))
                    .unwrap();
            }
            other => panic!("Unexpected request: {:?}", other),
        }

        let output = String::from_utf8(console_task.await.unwrap().unwrap()).unwrap();
        assert!(output.contains("Enter Quantity Purchased: "));
        assert!(output.contains("Purchased 3 units of Monitor successfully!"));
        assert!(output.contains("Total Cost: ₹21000"));
        assert!(output.contains("Exiting... Thank you!"));
    }

    #[tokio::test]
    async fn test_recoverable_errors_keep_the_loop_running() {
        let (client, mut receiver) = create_mock_client(10);

        let console_task = tokio::spawn(async move {
            let input: &[u8] = b"9\n4 1 abc\n2 99\n0\n";
            let mut console = Console::new(client, input, Vec::new(), "₹");
            console.run().await.map(|_| console.into_output())
        });

        match expect_request(&mut receiver).await {
            Some(InventoryRequest::GetProduct { id, respond_to }) => {
                assert_eq!(id, 99);
                respond_to.send(Err(InventoryError::NotFound(99))).unwrap();
            }
            other => panic!("Unexpected request: {:?}", other),
        }

        let output = String::from_utf8(console_task.await.unwrap().unwrap()).unwrap();
        assert!(output.contains("Invalid Choice!"));
        assert!(output.contains("Invalid number: abc"));
        assert!(output.contains("Product not found!"));
        assert!(output.contains("Exiting... Thank you!"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits_cleanly() {
        let (client, _receiver) = create_mock_client(10);
        let input: &[u8] = b"";
        let mut console = Console::new(client, input, Vec::new(), "₹");

        console.run().await.unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Exiting... Thank you!"));
    }

    #[tokio::test]
    async fn test_lost_service_is_fatal() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let input: &[u8] = b"1\n";
        let mut console = Console::new(client, input, Vec::new(), "₹");
        let result = console.run().await;
        assert!(matches!(
            result,
            Err(ConsoleError::Inventory(InventoryError::ActorCommunicationError(_)))
        ));
    }

    #[tokio::test]
    async fn test_ship_renders_shipment() {
        let (client, mut receiver) = create_mock_client(10);

        let console_task = tokio::spawn(async move {
            let input: &[u8] = b"4\n1\n5\n0\n";
            let mut console = Console::new(client, input, Vec::new(), "₹");
            console.run().await.map(|_| console.into_output())
        });

        match expect_request(&mut receiver).await {
            Some(InventoryRequest::ShipProduct { id, quantity, respond_to }) => {
                assert_eq!((id, quantity), (1, 5));
                let mut laptop = Product::new(1, "Laptop", 45000.0, 60000.0, 5);
                laptop.sold = 5;
                respond_to.send(Ok(laptop)).unwrap();
            }
            other => panic!("Unexpected request: {:?}", other),
        }

        let output = String::from_utf8(console_task.await.unwrap().unwrap()).unwrap();
        assert!(output.contains("Shipped 5 units of Laptop"));
    }
}
