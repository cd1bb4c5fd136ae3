//! Main menu choices.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddProduct,
    ViewProducts,
    EditProduct,
    DeleteProduct,
    AddOrder,
    ViewOrders,
    EditOrder,
    DeleteOrder,
    Exit,
}

impl MenuCommand {
    /// Menu order, as displayed.
    pub const ALL: [MenuCommand; 9] = [
        MenuCommand::AddProduct,
        MenuCommand::ViewProducts,
        MenuCommand::EditProduct,
        MenuCommand::DeleteProduct,
        MenuCommand::AddOrder,
        MenuCommand::ViewOrders,
        MenuCommand::EditOrder,
        MenuCommand::DeleteOrder,
        MenuCommand::Exit,
    ];

    /// Parses a menu choice; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.key() == input.trim())
    }

    pub fn key(self) -> &'static str {
        match self {
            MenuCommand::AddProduct => "1",
            MenuCommand::ViewProducts => "2",
            MenuCommand::EditProduct => "3",
            MenuCommand::DeleteProduct => "4",
            MenuCommand::AddOrder => "5",
            MenuCommand::ViewOrders => "6",
            MenuCommand::EditOrder => "7",
            MenuCommand::DeleteOrder => "8",
            MenuCommand::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddProduct => "Add Product",
            MenuCommand::ViewProducts => "View All Products",
            MenuCommand::EditProduct => "Edit Product",
            MenuCommand::DeleteProduct => "Delete Product",
            MenuCommand::AddOrder => "Add Order",
            MenuCommand::ViewOrders => "View All Orders",
            MenuCommand::EditOrder => "Edit Order",
            MenuCommand::DeleteOrder => "Delete Order",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// The menu as printed before every choice.
pub fn menu_text() -> String {
    let mut text = String::from("\n===== E-Shop Order Management =====\n");
    for command in MenuCommand::ALL {
        text.push_str(&format!("{}. {}\n", command.key(), command.label()));
    }
    text
}
