use anyhow::Result;
use clap::{Parser, Subcommand};

use user_client::{ClientError, UserServiceClient, DEFAULT_ENDPOINT};
use user_proto::{UserList, UserResponse};

#[derive(Parser, Debug)]
#[command(name = "user-client", version, about = "User service RPC client")]
struct Args {
    /// Service endpoint
    #[arg(long, env = "USER_SERVICE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Single call to issue; runs the demo scenario when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Create {
        name: String,
        email: String,
        phone_number: String,
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        active: bool,
    },
    Get {
        id: i32,
    },
    Update {
        id: i32,
        name: String,
        email: String,
        phone_number: String,
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        active: bool,
    },
    Delete {
        id: i32,
    },
    List,
}

fn print_user(label: &str, result: Result<UserResponse, ClientError>) {
    match result {
        Ok(user) => println!("{}: {:?}", label, user),
        Err(e) => println!("Error: {}", e),
    }
}

fn print_list(result: Result<UserList, ClientError>) {
    match result {
        Ok(list) => {
            println!("Users List:");
            for user in list.users {
                println!("{:?}", user);
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

async fn run_demo(client: &UserServiceClient) {
    println!("\n### Creating Users ###");
    print_user(
        "User Created",
        client.create_user("Mohan", "mohan@gmail.com", "8149958194", true).await,
    );
    print_user(
        "User Created",
        client.create_user("Geetansh", "geetansh@gmail.com", "9934567890", true).await,
    );

    println!("\n### Listing Users ###");
    print_list(client.list_users().await);

    println!("\n### Fetching a User ###");
    print_user("User Found", client.get_user(1).await);

    println!("\n### Updating a User ###");
    print_user(
        "User Updated",
        client
            .update_user(1, "Divay Updated", "divay.updated@gmail.com", "9999999999", false)
            .await,
    );

    println!("\n### Fetching Updated User ###");
    print_user("User Found", client.get_user(1).await);

    println!("\n### Deleting a User ###");
    match client.delete_user(2).await {
        Ok(ack) => println!("User Deleted: ID {}", ack.id),
        Err(e) => println!("Error: {}", e),
    }

    println!("\n### Final Users List ###");
    print_list(client.list_users().await);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = UserServiceClient::new(args.endpoint);

    match args.command {
        None => run_demo(&client).await,
        Some(Command::Create { name, email, phone_number, active }) => print_user(
            "User Created",
            client.create_user(&name, &email, &phone_number, active).await,
        ),
        Some(Command::Get { id }) => print_user("User Found", client.get_user(id).await),
        Some(Command::Update { id, name, email, phone_number, active }) => print_user(
            "User Updated",
            client.update_user(id, &name, &email, &phone_number, active).await,
        ),
        Some(Command::Delete { id }) => match client.delete_user(id).await {
            Ok(ack) => println!("User Deleted: ID {}", ack.id),
            Err(e) => println!("Error: {}", e),
        },
        Some(Command::List) => print_list(client.list_users().await),
    }

    Ok(())
}
