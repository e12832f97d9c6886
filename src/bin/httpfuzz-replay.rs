use httpfuzz::error::AppResult;

fn main() -> AppResult<()> {
    httpfuzz::entry::run_replay()
}
