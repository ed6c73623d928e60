use rquiz::app::App;
use rquiz::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::new()?;
    app.init()?;
    let outcome = app.run().await;
    app.restore()?;
    outcome
}
