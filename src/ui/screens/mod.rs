pub(crate) mod transactions;
