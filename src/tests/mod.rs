
mod test_sequential;
