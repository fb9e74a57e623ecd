//! Contact pages: index, new, show, edit.

use contacts_core::contact::{EMAIL, NAME, PHONE};
use contacts_core::types::ContactId;
use contacts_db::models::contact::Contact;
use maud::{html, Markup};

use super::layout;

fn contact_path(id: ContactId) -> String {
    format!("/contacts/{id}")
}

/// `contacts/index`: every contact in a table.
pub fn index(contacts: &[Contact]) -> Markup {
    layout(
        "Contacts",
        html! {
            h2 { "Contacts" }
            @if contacts.is_empty() {
                p.empty { "There is no contact to show." }
            } @else {
                table.contacts {
                    thead {
                        tr { th { "Name" } th { "Email" } th { "Phone" } }
                    }
                    tbody {
                        @for contact in contacts {
                            tr {
                                td { a href=(contact_path(contact.id)) { (contact.name) } }
                                td { (contact.email.as_deref().unwrap_or_default()) }
                                td { (contact.phone.as_deref().unwrap_or_default()) }
                            }
                        }
                    }
                }
            }
            a.button href="/contacts/new" { "New" }
        },
    )
}

/// `contacts/new`: empty creation form.
pub fn new_form() -> Markup {
    layout(
        "New Contact",
        html! {
            h2 { "New Contact" }
            (contact_form("/contacts", None, "Create"))
            a href="/contacts" { "Back" }
        },
    )
}

/// `contacts/show`: one contact, or a notice when it does not exist.
pub fn show(contact: Option<&Contact>) -> Markup {
    let Some(contact) = contact else {
        return not_found("Contact");
    };
    let path = contact_path(contact.id);

    layout(
        &contact.name,
        html! {
            h2 { (contact.name) }
            dl.contact {
                dt { "Name" } dd { (contact.name) }
                dt { "Email" } dd { (contact.email.as_deref().unwrap_or_default()) }
                dt { "Phone" } dd { (contact.phone.as_deref().unwrap_or_default()) }
            }
            div.actions {
                a href="/contacts" { "Back" }
                a href=(format!("{path}/edit")) { "Edit" }
                form method="post" action=(format!("{path}?_method=delete")) {
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}

/// `contacts/edit`: form pre-filled with the contact's fields.
pub fn edit(contact: Option<&Contact>) -> Markup {
    let Some(contact) = contact else {
        return not_found("Edit Contact");
    };
    let path = contact_path(contact.id);

    layout(
        "Edit Contact",
        html! {
            h2 { "Edit Contact" }
            (contact_form(&format!("{path}?_method=put"), Some(contact), "Update"))
            a href=(path) { "Back" }
        },
    )
}

fn contact_form(action: &str, contact: Option<&Contact>, submit: &str) -> Markup {
    html! {
        form.contact-form method="post" action=(action) {
            div.field {
                label for=(NAME) { "Name" }
                input type="text" id=(NAME) name=(NAME) required
                    value=[contact.map(|c| c.name.as_str())];
            }
            div.field {
                label for=(EMAIL) { "Email" }
                input type="text" id=(EMAIL) name=(EMAIL)
                    value=[contact.and_then(|c| c.email.as_deref())];
            }
            div.field {
                label for=(PHONE) { "Phone" }
                input type="text" id=(PHONE) name=(PHONE)
                    value=[contact.and_then(|c| c.phone.as_deref())];
            }
            button type="submit" { (submit) }
        }
    }
}

fn not_found(title: &str) -> Markup {
    layout(
        title,
        html! {
            h2 { "Contact not found" }
            p { "The contact you are looking for does not exist." }
            a href="/contacts" { "Back" }
        },
    )
}
