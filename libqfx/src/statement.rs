use crate::transaction::Transaction;
use crate::tree::{Child, Node};
use crate::Result;
use tracing::debug;

use std::convert::TryFrom;

pub const CREDIT_CARD_MESSAGES: &str = "CREDITCARDMSGSRSV1";
pub const STATEMENT_RESPONSE: &str = "CCSTMTTRNRS";
pub const STATEMENT: &str = "CCSTMTRS";
pub const ACCOUNT_FROM: &str = "CCACCTFROM";
pub const ACCOUNT_ID: &str = "ACCTID";
pub const TRANSACTION_LIST: &str = "BANKTRANLIST";
pub const TRANSACTION: &str = "STMTTRN";
pub const TRANSACTION_TYPE: &str = "TRNTYPE";
pub const DATE_POSTED: &str = "DTPOSTED";
pub const TRANSACTION_AMOUNT: &str = "TRNAMT";
pub const PAYEE_NAME: &str = "NAME";
pub const FITID: &str = "FITID";

/// Path from the `<OFX>` root down to the statement element.
pub const STATEMENT_PATH: [&str; 3] = [CREDIT_CARD_MESSAGES, STATEMENT_RESPONSE, STATEMENT];

/// Append `<ACCTID>` to the statement's account and rewrite the FITID of every
/// transaction in its list. Returns how many transactions were rewritten.
///
/// Mutates `root` as it goes, callers wanting all-or-nothing should patch a copy.
pub fn patch(root: &mut Node, account_id: &str) -> Result<usize> {
    let statement = STATEMENT_PATH
        .iter()
        .try_fold(root, |node, name| node.node_mut(name))?;

    statement
        .node_mut(ACCOUNT_FROM)?
        .append_leaf(ACCOUNT_ID, account_id);

    let mut patched = 0;
    for child in statement.node_mut(TRANSACTION_LIST)?.children_mut() {
        let txn = match child {
            Child::Node(node) if node.name() == TRANSACTION => node,
            _ => continue,
        };

        let fitid = Transaction::try_from(&*txn)?.fitid();
        debug!(
            "FITID {} -> {}",
            txn.get(FITID)
                .and_then(Child::as_leaf)
                .map_or("<none>", |leaf| leaf.content.as_str()),
            fitid
        );
        txn.upsert_leaf(FITID, fitid)?;
        patched += 1;
    }

    Ok(patched)
}
