mod test_form;
