use clap::Parser;
use roster::request::RawArgs;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Manage a JSON user list stored in a flat file", long_about = None)]
pub struct Cli {
    /// File to store the users list in the json format
    #[arg(long = "fileName", value_name = "PATH", default_value = "")]
    pub file_name: String,

    /// One of: add, list, findById, remove
    #[arg(long, value_name = "NAME", default_value = "")]
    pub operation: String,

    /// User id to be found in the users list
    #[arg(long, value_name = "ID", default_value = "")]
    pub id: String,

    /// Valid json object with the id, email and age fields
    #[arg(long, value_name = "JSON", default_value = "")]
    pub item: String,
}

impl Cli {
    pub fn into_raw_args(self) -> RawArgs {
        RawArgs {
            file_name: self.file_name,
            operation: self.operation,
            id: self.id,
            item: self.item,
        }
    }
}
