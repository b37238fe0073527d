use crate::admin::read_config;
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    symbol_short, token, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

pub fn balance(e: &Env, account: &Address) -> i128 {
    let config = read_config(e);
    token::Client::new(e, &config.token).balance(account)
}

/// Moves tokens on the external ledger with the sender's own authorization.
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    let config = read_config(e);
    token::Client::new(e, &config.token).transfer(from, to, &amount);
}

/// Moves tokens between the accounts the engine manages (pools, escrow,
/// operator, reward accounts) with the contract vouching for the hop
/// instead of a per-call signature.
pub fn transfer_as_agent(e: &Env, from: &Address, to: &Address, amount: i128) {
    let config = read_config(e);

    // 1) Describe the sub-invocation: token.transfer(from, to, amount)
    let sub_invocation = SubContractInvocation {
        context: ContractContext {
            contract: config.token.clone(),
            fn_name: symbol_short!("transfer"),
            args: (from.clone(), to.clone(), amount).into_val(e),
        },
        sub_invocations: vec![e],
    };

    // 2) Authorize it as the current contract
    let mut auth_entries: Vec<InvokerContractAuthEntry> = Vec::new(e);
    auth_entries.push_back(InvokerContractAuthEntry::Contract(sub_invocation));
    e.authorize_as_current_contract(auth_entries);

    // 3) Invoke the transfer on the token contract
    let fn_name = Symbol::new(e, "transfer");
    let args: Vec<Val> = (from.clone(), to.clone(), amount).into_val(e);
    let _: () = e.invoke_contract(&config.token, &fn_name, args);
}
