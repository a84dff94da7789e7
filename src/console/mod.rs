//! Interactive teller console
//!
//! The presentation collaborator for the banking core: menu rendering,
//! input prompting, and retry loops all live here, and every operator
//! message is produced here. The core types never print; their errors are
//! displayed through their `Display` messages.
//!
//! The console is generic over its input and output handles so tests can
//! drive a full session with an in-memory cursor and inspect the
//! transcript.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::core::validation::{normalize_national_id, parse_account_type, parse_amount};
use crate::core::Bank;
use crate::types::{Account, AccountKind, BankError, Customer};

/// An interactive teller session over a pair of I/O handles
///
/// Owns the bank for the lifetime of the session. `run` drives the main
/// menu until the operator exits or input ends.
pub struct Console<R, W> {
    input: R,
    output: W,
    bank: Bank,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session with an empty bank
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            bank: Bank::new(),
        }
    }

    /// The session's bank
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Consume the session, returning the bank
    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Drive the main menu loop until exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner("Personal Banking")?;

        loop {
            self.print_main_menu()?;
            let Some(selection) = self.read_selection()? else {
                // Input ended; leave quietly
                return Ok(());
            };
            match selection {
                0 => {
                    writeln!(self.output, "Thank you for banking with us.")?;
                    return Ok(());
                }
                1 => self.create_account()?,
                2 => self.make_deposit()?,
                3 => self.make_withdrawal()?,
                4 => self.list_balances()?,
                _ => unreachable!("read_selection only returns 0-4"),
            }
        }
    }

    fn print_banner(&mut self, title: &str) -> io::Result<()> {
        let border = "*".repeat(title.len() + 8);
        writeln!(self.output, "{}", border)?;
        writeln!(self.output, "*   {}   *", title)?;
        writeln!(self.output, "{}", border)
    }

    fn print_section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "+{}+", "=".repeat(title.len() + 6))?;
        writeln!(self.output, "   {}", title)?;
        writeln!(self.output, "+{}+", "=".repeat(title.len() + 6))
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        self.print_section("Please make a selection")?;
        writeln!(self.output, "1) Create a new account")?;
        writeln!(self.output, "2) Make a deposit")?;
        writeln!(self.output, "3) Make a withdrawal")?;
        writeln!(self.output, "4) List account balances")?;
        writeln!(self.output, "0) Exit")
    }

    /// Read one trimmed input line; `None` means end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a main-menu selection, retrying until it is in 0-4
    fn read_selection(&mut self) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "Enter your selection: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if n <= 4 => return Ok(Some(n)),
                Ok(_) => writeln!(self.output, "Selection out of range. Please try again.")?,
                Err(_) => writeln!(self.output, "Invalid selection. Please enter 0-4.")?,
            }
        }
    }

    /// Ask a free-form question, retrying until the answer is non-empty
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            writeln!(self.output, "Entry cannot be empty. Please try again.")?;
        }
    }

    /// Ask a question with an enumerated set of answers, retrying until one
    /// of them (lowercased) is entered
    fn prompt_choice(&mut self, question: &str, choices: &[&str]) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{} ({}): ", question, choices.join("/"))?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let answer = line.to_lowercase();
            if choices.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Invalid entry. Please try again.")?;
        }
    }

    /// Prompt for a national identifier until it validates
    fn prompt_national_id(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(raw) = self.prompt("Please enter the national id: ")? else {
                return Ok(None);
            };
            match normalize_national_id(&raw) {
                Ok(id) => return Ok(Some(id)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Prompt for an opening deposit until the account opens
    ///
    /// The account constructor is the validator here: parse failures and
    /// below-minimum deposits are both reported, and the prompt repeats.
    fn prompt_opening_deposit(&mut self, kind: AccountKind) -> io::Result<Option<Account>> {
        loop {
            let Some(raw) = self.prompt("Please enter an initial deposit: ")? else {
                return Ok(None);
            };
            let amount = match parse_amount(&raw) {
                Ok(amount) => amount,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            match Account::open(kind, amount) {
                Ok(account) => return Ok(Some(account)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// The account-opening flow
    fn create_account(&mut self) -> io::Result<()> {
        self.print_section("Create an Account")?;

        let Some(kind_raw) =
            self.prompt_choice("Please enter an account type", &["checking", "savings"])?
        else {
            return Ok(());
        };
        let kind = match parse_account_type(&kind_raw) {
            Ok(kind) => kind,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                writeln!(self.output, "Account was not created.")?;
                return Ok(());
            }
        };

        let Some(first_name) = self.prompt("Please enter a first name: ")? else {
            return Ok(());
        };
        let Some(last_name) = self.prompt("Please enter a last name: ")? else {
            return Ok(());
        };
        let Some(national_id) = self.prompt_national_id()? else {
            return Ok(());
        };
        let Some(account) = self.prompt_opening_deposit(kind)? else {
            return Ok(());
        };

        self.bank
            .add_customer(Customer::new(first_name, last_name, national_id, account));
        writeln!(self.output, "Account created.")
    }

    /// List customers and read a selection; `None` aborts the current
    /// action (no retry, matching the original flow)
    fn select_customer(&mut self) -> io::Result<Option<usize>> {
        if self.bank.is_empty() {
            writeln!(self.output, "No customers at this bank.")?;
            return Ok(None);
        }

        writeln!(self.output, "Select an account:")?;
        for (i, customer) in self.bank.customers().iter().enumerate() {
            writeln!(self.output, "\t{}) {}", i + 1, customer.basic_info())?;
        }
        write!(self.output, "Enter your selection: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let index = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
        match index {
            Some(i) if i < self.bank.count() => Ok(Some(i)),
            _ => {
                writeln!(self.output, "Invalid account selected.")?;
                Ok(None)
            }
        }
    }

    fn deposit_into(&mut self, index: usize, raw_amount: &str) -> Result<Decimal, BankError> {
        let amount = parse_amount(raw_amount)?;
        let account = self.bank.customer_at_mut(index)?.account_mut();
        account.deposit(amount)?;
        Ok(account.balance())
    }

    fn withdraw_from(&mut self, index: usize, raw_amount: &str) -> Result<Decimal, BankError> {
        let amount = parse_amount(raw_amount)?;
        let account = self.bank.customer_at_mut(index)?.account_mut();
        account.withdraw(amount)?;
        Ok(account.balance())
    }

    /// The deposit flow; offers repeat deposits until the operator declines
    fn make_deposit(&mut self) -> io::Result<()> {
        self.print_section("Make a Deposit")?;
        loop {
            if let Some(index) = self.select_customer()? {
                let Some(raw) = self.prompt("How much would you like to deposit?: ")? else {
                    return Ok(());
                };
                match self.deposit_into(index, &raw) {
                    Ok(balance) => {
                        writeln!(self.output, "Deposit complete. New balance: ${:.2}", balance)?
                    }
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            let Some(again) =
                self.prompt_choice("Would you like to make another deposit?", &["y", "n"])?
            else {
                return Ok(());
            };
            if again == "n" {
                return Ok(());
            }
        }
    }

    /// The withdrawal flow; single-shot
    fn make_withdrawal(&mut self) -> io::Result<()> {
        self.print_section("Make a Withdrawal")?;
        let Some(index) = self.select_customer()? else {
            return Ok(());
        };
        let Some(raw) = self.prompt("How much would you like to withdraw?: ")? else {
            return Ok(());
        };
        match self.withdraw_from(index, &raw) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrawal complete. New balance: ${:.2}",
                balance
            ),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    /// The balance-listing flow: pick a customer, show the account summary
    fn list_balances(&mut self) -> io::Result<()> {
        self.print_section("List Account Balances")?;
        let Some(index) = self.select_customer()? else {
            return Ok(());
        };
        self.print_section("Account Details")?;
        match self.bank.customer_at(index) {
            Ok(customer) => {
                let details = format!("{}\n{}", customer.basic_info(), customer.account());
                writeln!(self.output, "{}", details)
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session, returning the final bank and the transcript
    fn run_session(script: &str) -> (Bank, String) {
        let mut output = Vec::new();
        let bank = {
            let mut console = Console::new(Cursor::new(script.as_bytes()), &mut output);
            console.run().expect("session I/O failed");
            console.into_bank()
        };
        (bank, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session_open_deposit_withdraw_list() {
        let script = "1\nchecking\nJane\nDoe\n123-45-6789\n150\n\
                      2\n1\n50\nn\n\
                      3\n1\n300\n\
                      3\n1\n200\n\
                      4\n1\n\
                      0\n";

        let (bank, transcript) = run_session(script);

        assert_eq!(bank.count(), 1);
        let customer = bank.customer_at(0).unwrap();
        assert_eq!(customer.basic_info(), "Doe, Jane");
        assert_eq!(customer.national_id(), "123-45-6789");
        assert_eq!(customer.account().balance(), Decimal::ZERO);

        assert!(transcript.contains("Account created."));
        assert!(transcript.contains("Deposit complete. New balance: $200.00"));
        assert!(transcript.contains("Insufficient funds: available $200.00, requested $300.00"));
        assert!(transcript.contains("Withdrawal complete. New balance: $0.00"));
        assert!(transcript.contains("Checking account, balance: $0.00"));
        assert!(transcript.contains("Thank you for banking with us."));
    }

    #[test]
    fn test_create_account_retries_invalid_inputs() {
        // Bad account type, bad national id, non-numeric then below-minimum
        // deposits; every prompt retries until valid
        let script = "1\nbrokerage\nsavings\nJane\nDoe\n666-12-3456\n123456789\nabc\n49.99\n50\n0\n";

        let (bank, transcript) = run_session(script);

        assert_eq!(bank.count(), 1);
        assert_eq!(
            bank.customer_at(0).unwrap().account().balance(),
            Decimal::new(50, 0)
        );

        assert!(transcript.contains("Invalid entry. Please try again."));
        assert!(transcript.contains("Invalid national identifier '666-12-3456'"));
        assert!(transcript.contains("Invalid amount 'abc'"));
        assert!(transcript
            .contains("Savings accounts require a minimum opening deposit of $50.00, got $49.99"));
    }

    #[test]
    fn test_deposit_with_no_customers() {
        let script = "2\nn\n0\n";

        let (bank, transcript) = run_session(script);

        assert!(bank.is_empty());
        assert!(transcript.contains("No customers at this bank."));
    }

    #[test]
    fn test_invalid_account_selection_aborts_action() {
        let script = "1\nchecking\nJane\nDoe\n123-45-6789\n150\n\
                      3\n7\n\
                      0\n";

        let (bank, transcript) = run_session(script);

        assert!(transcript.contains("Invalid account selected."));
        // Balance untouched
        assert_eq!(
            bank.customer_at(0).unwrap().account().balance(),
            Decimal::new(150, 0)
        );
    }

    #[test]
    fn test_menu_selection_retries() {
        let script = "9\nx\n0\n";

        let (_, transcript) = run_session(script);

        assert!(transcript.contains("Selection out of range. Please try again."));
        assert!(transcript.contains("Invalid selection. Please enter 0-4."));
        assert!(transcript.contains("Thank you for banking with us."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (bank, transcript) = run_session("");

        assert!(bank.is_empty());
        assert!(transcript.contains("Personal Banking"));
    }
}
