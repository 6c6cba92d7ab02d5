shape! {
    pub struct CheckIfPhoneNumberIsOptedOutRequest {
        phone_number: text = "phoneNumber" { set_phone_number, with_phone_number },
    }
}

impl CheckIfPhoneNumberIsOptedOutRequest {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }
}

shape! {
    pub struct CheckIfPhoneNumberIsOptedOutResult {
        is_opted_out: flag = "isOptedOut" { set_is_opted_out, with_is_opted_out },
    }
}

shape! {
    /// Reads account-wide SMS settings.
    pub struct GetSMSAttributesRequest {
        /// Names to read; absent reads all of them.
        attributes: list(String) = "attributes" {
            set_attributes, with_attributes, attributes_mut, push_attributes
        },
    }
}

shape! {
    pub struct GetSMSAttributesResult {
        attributes: map(String) = "attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    /// Changes account-wide SMS settings, see [`crate::attributes::sms`].
    pub struct SetSMSAttributesRequest {
        attributes: map(String) = "attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct ListPhoneNumbersOptedOutRequest {
        next_token: text = "nextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct ListPhoneNumbersOptedOutResult {
        phone_numbers: list(String) = "phoneNumbers" {
            set_phone_numbers, with_phone_numbers, phone_numbers_mut, push_phone_numbers
        },
        next_token: text = "nextToken" { set_next_token, with_next_token },
    }
}

shape! {
    /// Opts a number back in. Allowed once every 30 days.
    pub struct OptInPhoneNumberRequest {
        phone_number: text = "phoneNumber" { set_phone_number, with_phone_number },
    }
}

impl OptInPhoneNumberRequest {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }
}
