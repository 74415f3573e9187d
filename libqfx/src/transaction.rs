use crate::statement::{DATE_POSTED, PAYEE_NAME, TRANSACTION_AMOUNT, TRANSACTION_TYPE};
use crate::tree::Node;
use crate::QfxError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::{Digest, Md5};

use std::convert::TryFrom;

/// The four fields of a `<STMTTRN>` that identify it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction<'t> {
    pub kind: &'t str,
    pub posted: &'t str,
    pub amount: &'t str,
    pub payee: &'t str,
}

impl<'t> TryFrom<&'t Node> for Transaction<'t> {
    type Error = QfxError;

    fn try_from(node: &'t Node) -> Result<Self, Self::Error> {
        Ok(Transaction {
            kind: &node.leaf(TRANSACTION_TYPE)?.content,
            posted: &node.leaf(DATE_POSTED)?.content,
            amount: &node.leaf(TRANSACTION_AMOUNT)?.content,
            payee: &node.leaf(PAYEE_NAME)?.content,
        })
    }
}

impl<'t> Transaction<'t> {
    pub fn fitid(&self) -> String {
        derive_fitid(self.kind, self.posted, self.amount, self.payee)
    }
}

/// Stable surrogate id for a transaction: the posting day (first 8 characters of the
/// posted date) followed by the hex MD5 of the base64 of `kind + posted + amount + payee`.
pub fn derive_fitid(kind: &str, posted: &str, amount: &str, payee: &str) -> String {
    let fingerprint = [kind, posted, amount, payee].concat();
    let encoded = STANDARD.encode(fingerprint.as_bytes());
    let digest = Md5::digest(encoded.as_bytes());

    let day: String = posted.chars().take(8).collect();
    format!("{}{:x}", day, digest)
}

#[cfg(test)]
mod tests {
    use crate::transaction::{derive_fitid, Transaction};
    use crate::tree::{Child, Leaf, Node};
    use crate::QfxError;

    use anyhow::Result;

    use std::convert::TryFrom;

    #[test]
    fn derive_known_fitid() {
        let fitid = derive_fitid("DEBIT", "20230115", "-42.00", "ACME");
        assert_eq!(fitid, "2023011577dab954dda90e7b838bfa4bb143cc0a");
        assert_eq!(fitid.len(), 40);
    }

    #[test]
    fn only_the_day_prefixes_the_digest() {
        let fitid = derive_fitid("CREDIT", "20230201120000.000[-5:EST]", "1500.00", "PAYROLL INC");
        assert_eq!(fitid, "2023020127978bb924b6a85f69cf4c349b190937");
    }

    #[test]
    fn short_posted_date_is_kept_whole() {
        let fitid = derive_fitid("DEBIT", "2023", "1", "X");
        assert!(fitid.starts_with("2023"));
        assert_eq!(fitid.len(), 4 + 32);
    }

    #[test]
    fn read_transaction_fields() -> Result<()> {
        let node = Node::with_children(
            "STMTTRN",
            vec![
                Child::Leaf(Leaf::new("TRNTYPE", "DEBIT")),
                Child::Leaf(Leaf::new("DTPOSTED", "20230115")),
                Child::Leaf(Leaf::new("TRNAMT", "-42.00")),
                Child::Leaf(Leaf::new("FITID", "old")),
                Child::Leaf(Leaf::new("NAME", "ACME")),
            ],
        );
        let txn = Transaction::try_from(&node)?;
        assert_eq!(txn.payee, "ACME");
        assert_eq!(txn.fitid(), derive_fitid("DEBIT", "20230115", "-42.00", "ACME"));
        Ok(())
    }

    #[test]
    fn missing_payee_is_fatal() {
        let node = Node::with_children(
            "STMTTRN",
            vec![
                Child::Leaf(Leaf::new("TRNTYPE", "DEBIT")),
                Child::Leaf(Leaf::new("DTPOSTED", "20230115")),
                Child::Leaf(Leaf::new("TRNAMT", "-42.00")),
            ],
        );
        assert_eq!(
            Transaction::try_from(&node).unwrap_err(),
            QfxError::MissingField {
                parent: "STMTTRN".to_string(),
                field: "NAME".to_string(),
            }
        );
    }
}
