
mod test_session;
