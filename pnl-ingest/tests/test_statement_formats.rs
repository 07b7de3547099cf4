use pnl_ingest::{Schema, SourceFields, parse_statement};

#[test]
fn test_credit_card_export() {
    let text = "Transaction Date,Post Date,Description,Category,Type,Amount,Memo\n\
                01/01/2024,01/02/2024,Coffee,Dining,Sale,-4.50,\n";
    let txns = parse_statement(text);
    assert_eq!(txns.len(), 1);

    let t = &txns[0];
    assert_eq!(t.amount(), -4.5);
    assert_eq!(t.date(), "01/01/2024");
    assert_eq!(t.kind(), "Sale");
    assert_eq!(t.description(), "Coffee");
    assert_eq!(t.schema(), Schema::CreditCard);
    match t.source() {
        SourceFields::CreditCard { transaction_date, post_date, category, memo } => {
            assert_eq!(transaction_date, "01/01/2024");
            assert_eq!(post_date, "01/02/2024");
            assert_eq!(category, "Dining");
            assert_eq!(memo, "");
        }
        other => panic!("unexpected source fields: {other:?}"),
    }
}

#[test]
fn test_credit_card_date_falls_back_to_post_date() {
    let text = "Transaction Date,Post Date,Description,Category,Type,Amount,Memo\r\n\
                ,01/02/2024,Refund,Shopping,Return,12.00,\r\n";
    let txns = parse_statement(text);
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].date(), "01/02/2024");
    assert_eq!(txns[0].amount(), 12.0);
}

#[test]
fn test_deposit_account_export() {
    let text = "Details,Posting Date,Description,Amount,Type,Balance,Check or Slip #\n\
                DEBIT,01/05/2024,ATM Withdrawal,-20,ATM,980.00,\n";
    let txns = parse_statement(text);
    assert_eq!(txns.len(), 1);

    let t = &txns[0];
    assert_eq!(t.date(), "01/05/2024");
    assert_eq!(t.amount(), -20.0);
    assert_eq!(t.kind(), "ATM");
    match t.source() {
        SourceFields::DepositAccount { details, posting_date, balance, check_or_slip } => {
            assert_eq!(details, "DEBIT");
            assert_eq!(posting_date, "01/05/2024");
            assert_eq!(balance, "980.00");
            assert_eq!(check_or_slip, "");
        }
        other => panic!("unexpected source fields: {other:?}"),
    }
}

#[test]
fn test_deposit_account_tolerates_header_case_and_spacing() {
    let text = "DETAILS,\"  posting   DATE \",description,AMOUNT,type,balance,Slip No\n\
                CREDIT,02/01/2024,\"PAYROLL, ACME\",\"1,250.00\",ACH_CREDIT,2230.00,77\n";
    let txns = parse_statement(text);
    assert_eq!(txns.len(), 1);

    let t = &txns[0];
    assert_eq!(t.amount(), 1250.0);
    assert_eq!(t.date(), "02/01/2024");
    assert_eq!(t.description(), "PAYROLL, ACME");
    match t.source() {
        SourceFields::DepositAccount { check_or_slip, .. } => assert_eq!(check_or_slip, "77"),
        other => panic!("unexpected source fields: {other:?}"),
    }
}

#[test]
fn test_deposit_account_without_check_column() {
    let text = "Details,Posting Date,Description,Amount,Type,Balance\n\
                DEBIT,01/05/2024,Fee,-3,FEE_TRANSACTION,977.00\n";
    let txns = parse_statement(text);
    match txns[0].source() {
        SourceFields::DepositAccount { check_or_slip, .. } => assert_eq!(check_or_slip, ""),
        other => panic!("unexpected source fields: {other:?}"),
    }
}

#[test]
fn test_generic_fallback() {
    let txns = parse_statement("Foo,Amount,Type\nx,15.00,Refund\n");
    assert_eq!(txns.len(), 1);

    let t = &txns[0];
    assert_eq!(t.amount(), 15.0);
    assert_eq!(t.kind(), "Refund");
    assert_eq!(t.date(), "");
    assert_eq!(t.description(), "");
    assert_eq!(t.source(), &SourceFields::Generic);
}

#[test]
fn test_generic_picks_first_date_and_description_columns() {
    let text = "Settle Date,Trade Date,Long Description,Amount,Type\n\
                2024-03-02,2024-03-01,Dividend AAPL,3.10,DIV\n";
    let txns = parse_statement(text);
    assert_eq!(txns[0].date(), "2024-03-02");
    assert_eq!(txns[0].description(), "Dividend AAPL");
}

#[test]
fn test_unparseable_amount_is_dropped() {
    assert!(parse_statement("Amount,Type\nabc,Fee\n").is_empty());

    let txns = parse_statement("Amount,Type\nabc,Fee\n2.00,Fee\n,Fee\n");
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].amount(), 2.0);
}

#[test]
fn test_unknown_layout_yields_nothing() {
    assert!(parse_statement("Date,Payee,Value\n01/01/2024,Shop,-3\n").is_empty());
}

#[test]
fn test_short_row_is_padded() {
    // Memo column missing entirely from the data line.
    let text = "Transaction Date,Post Date,Description,Category,Type,Amount,Memo\n\
                01/03/2024,01/04/2024,Lunch,Dining,Sale,-11.25\n";
    let txns = parse_statement(text);
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].amount(), -11.25);
}

#[test]
fn test_rows_keep_file_order() {
    let text = "Amount,Type,Description\n1,A,first\nbad,A,skipped\n-2,B,second\n3,A,third\n";
    let descriptions: Vec<_> = parse_statement(text)
        .iter()
        .map(|t| t.description().to_string())
        .collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);
}

#[test]
fn test_bare_carriage_returns_and_blank_lines() {
    let text = "\r\nAmount,Type\r\r5,Fee\r\r\n-1,Fee\r";
    assert_eq!(parse_statement(text).len(), 2);
}
